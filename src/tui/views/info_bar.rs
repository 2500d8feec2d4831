//! Notice rendering

use crate::tui::constants::{NOTICE_HEIGHT, NOTICE_WIDTH};
use crate::tui::notification::{NoticeLevel, NoticePosition, Notification};
use crate::tui::theme::Theme;
use crate::tui::views::helpers::bottom_right_rect;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Render `notification` over `area` at its anchor
pub fn render_info_bar(f: &mut Frame, area: Rect, notification: &Notification, theme: &Theme) {
    let rect = match notification.position {
        NoticePosition::BottomRight => bottom_right_rect(NOTICE_WIDTH, NOTICE_HEIGHT, area),
    };

    let (icon, style) = match notification.level {
        NoticeLevel::Warning => ("⚠", theme.warning_style()),
        NoticeLevel::Error => ("✖", theme.error_style()),
    };

    let block = Block::default()
        .title(format!(" {} {} ", icon, notification.title))
        .title_style(style)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.fg.unwrap_or(theme.border)))
        .style(Style::default().fg(theme.text_primary).bg(theme.window_bg));
    let paragraph = Paragraph::new(Line::from(notification.message.as_str()))
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}
