//! Color dialog rendering

use crate::config::ThemeColor;
use crate::tui::constants::{COLOR_DIALOG_HEIGHT, COLOR_DIALOG_WIDTH};
use crate::tui::settings::color_dialog::{ColorDialog, PRESET_COLORS};
use crate::tui::theme::Theme;
use crate::tui::views::helpers::centered_rect;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

pub fn render_color_dialog(f: &mut Frame, area: Rect, dialog: &ColorDialog, theme: &Theme) {
    let rect = centered_rect(COLOR_DIALOG_WIDTH, COLOR_DIALOG_HEIGHT, area);

    let preview = match dialog.candidate().to_rgb() {
        Some((r, g, b)) if dialog.candidate().is_valid_hex() => {
            Span::styled("        ", Style::default().bg(Color::Rgb(r, g, b)))
        }
        _ => Span::styled("(not a color)", theme.secondary_style()),
    };

    let mut presets = vec![Span::raw("Presets  ")];
    for (i, hex) in PRESET_COLORS.iter().enumerate() {
        let color = ThemeColor::new(*hex)
            .to_rgb()
            .map_or(Color::Reset, |(r, g, b)| Color::Rgb(r, g, b));
        let (open, close) = if dialog.preset() == Some(i) {
            ("[", "]")
        } else {
            (" ", " ")
        };
        presets.push(Span::styled(open, theme.accent_style()));
        presets.push(Span::styled("██", Style::default().fg(color)));
        presets.push(Span::styled(close, theme.accent_style()));
    }

    let error = match dialog.error() {
        Some(message) => Line::from(Span::styled(message, theme.error_style())),
        None => Line::from(""),
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Hex      "),
            Span::styled(dialog.input(), theme.accent_style()),
            Span::raw("_"),
        ]),
        Line::from(""),
        Line::from(vec![Span::raw("Preview  "), preview]),
        Line::from(""),
        Line::from(presets),
        Line::from(""),
        error,
    ];

    let block = Block::default()
        .title(" Choose color ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent_style())
        .style(Style::default().fg(theme.text_primary).bg(theme.window_bg));

    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(lines).block(block), rect);
}
