//! Settings page rendering
//!
//! Page colors come from the loaded style sheet; the accent and Mica state
//! come from the window theme.

use crate::config::{ConfigStore, StyleSheet};
use crate::tui::settings::cards::{CardAction, CardControl, SettingCard};
use crate::tui::settings::{PageRow, SettingsView};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Render the settings page; the view's scroll offset must already be set
pub fn render_settings(
    f: &mut Frame,
    area: Rect,
    view: &SettingsView,
    store: &ConfigStore,
    theme: &Theme,
    focused: bool,
) {
    let sheet = view.style();
    let background = Block::default().style(Style::default().bg(theme.surface(sheet.background)));
    f.render_widget(background, area);

    let offset = view.scroll_offset();
    for (top, row) in view.rows() {
        if top < offset {
            continue;
        }
        let y = top - offset;
        if y + row.height() > area.height {
            break;
        }
        let rect = Rect {
            x: area.x + 1,
            y: area.y + y,
            width: area.width.saturating_sub(2),
            height: row.height(),
        };

        match row {
            PageRow::Heading => {
                let heading = Paragraph::new(Line::from(Span::styled(
                    "Settings",
                    Style::default().fg(sheet.label).add_modifier(Modifier::BOLD),
                )));
                f.render_widget(heading, rect);
            }
            PageRow::GroupTitle { group } => {
                let title = view.groups()[group].title;
                let paragraph = Paragraph::new(Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(sheet.group_title)
                        .add_modifier(Modifier::BOLD),
                )));
                f.render_widget(paragraph, Rect { y: rect.y + 1, height: 1, ..rect });
            }
            PageRow::Card { group, card, index } => {
                let card = &view.groups()[group].cards[card];
                let selected = focused && index == view.selected_index();
                render_card(f, rect, card, store, sheet, theme, selected);
            }
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    card: &SettingCard,
    store: &ConfigStore,
    sheet: &StyleSheet,
    theme: &Theme,
    selected: bool,
) {
    let border = if selected { theme.accent } else { sheet.card_border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.surface(sheet.card_background)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (title_color, description_color, icon_color) = if card.enabled {
        (sheet.title, sheet.description, theme.accent)
    } else {
        (sheet.disabled, sheet.disabled, sheet.disabled)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", card.icon), Style::default().fg(icon_color)),
            Span::styled(
                card.title,
                Style::default().fg(title_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            card.content.as_str(),
            Style::default().fg(description_color),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    let control =
        Paragraph::new(control_line(card, store, sheet, theme)).alignment(Alignment::Right);
    f.render_widget(control, Rect { height: 1, ..inner });
}

fn control_line<'a>(
    card: &'a SettingCard,
    store: &ConfigStore,
    sheet: &StyleSheet,
    theme: &Theme,
) -> Line<'a> {
    match &card.control {
        CardControl::Switch(_) if !card.enabled => Line::from(Span::styled(
            "Unavailable",
            Style::default().fg(sheet.disabled),
        )),
        CardControl::Switch(switch) => {
            if switch.is_checked(store) {
                Line::from(vec![
                    Span::styled("On ", Style::default().fg(sheet.title)),
                    Span::styled(" ● ", theme.accent_button_style()),
                ])
            } else {
                Line::from(vec![
                    Span::styled("Off ", Style::default().fg(sheet.title)),
                    Span::styled("○  ", Style::default().fg(sheet.description)),
                ])
            }
        }
        CardControl::Options(options) => {
            let selected = options.selected_index(store);
            let mut spans = Vec::new();
            for (i, (_, label)) in options.options.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.extend(radio(*label, selected == Some(i), sheet, theme));
            }
            Line::from(spans)
        }
        CardControl::Color(color) => {
            let current = color.current(store);
            let custom = color.uses_custom(store);
            let swatch = current
                .to_rgb()
                .map_or(Color::Reset, |(r, g, b)| Color::Rgb(r, g, b));

            let mut spans = radio("Default color", !custom, sheet, theme);
            spans.push(Span::raw("  "));
            spans.extend(radio("Custom color", custom, sheet, theme));
            spans.push(Span::raw("  "));
            spans.push(Span::styled("  ", Style::default().bg(swatch)));
            spans.push(Span::styled(
                format!(" {}", current),
                Style::default().fg(sheet.description),
            ));
            Line::from(spans)
        }
        CardControl::Hyperlink(link) => Line::from(Span::styled(
            link.text,
            theme.accent_style().add_modifier(Modifier::UNDERLINED),
        )),
        CardControl::Push(push) => match push.action {
            CardAction::OpenUrl(_) => {
                Line::from(Span::styled(format!(" {} ", push.text), theme.accent_button_style()))
            }
            CardAction::CheckUpdate => Line::from(Span::styled(
                format!("[ {} ]", push.text),
                Style::default().fg(sheet.title),
            )),
        },
    }
}

fn radio<'a>(label: &'a str, checked: bool, sheet: &StyleSheet, theme: &Theme) -> Vec<Span<'a>> {
    if checked {
        vec![
            Span::styled("(•) ", theme.accent_style()),
            Span::styled(label, Style::default().fg(sheet.title)),
        ]
    } else {
        vec![
            Span::styled("( ) ", Style::default().fg(sheet.description)),
            Span::styled(label, Style::default().fg(sheet.description)),
        ]
    }
}
