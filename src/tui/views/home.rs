//! Home page rendering

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Paragraph},
};

pub fn render_home(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(Block::default().style(theme.window_style()), area);

    let text = Paragraph::new(Line::from("Home Interface"))
        .style(theme.window_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    let y = area.y + area.height / 2;
    f.render_widget(text, Rect { y, height: 1, ..area });
}
