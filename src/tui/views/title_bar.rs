//! Title bar rendering

use crate::tui::constants::WINDOW_TITLE;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the title bar; `mica` marks a translucent window
pub fn render_title_bar(f: &mut Frame, area: Rect, mica: bool, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", WINDOW_TITLE),
        theme.title_bar_style().add_modifier(Modifier::BOLD),
    )))
    .style(theme.title_bar_style());
    f.render_widget(title, area);

    if mica {
        let marker = Paragraph::new(Line::from(Span::styled("Mica ", theme.secondary_style())))
            .alignment(Alignment::Right);
        f.render_widget(marker, area);
    }
}
