//! Footer view rendering

use crate::tui::keybindings::{KeyContext, get_navigation_commands};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the key hints for the focused context
pub fn render_footer(f: &mut Frame, area: Rect, context: KeyContext, theme: &Theme) {
    let mut spans = Vec::new();
    for (idx, cmd) in get_navigation_commands(context).iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(cmd.key, theme.footer_key_style()));
        spans.push(Span::raw(format!(" {}", cmd.label)));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .style(theme.window_style())
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}
