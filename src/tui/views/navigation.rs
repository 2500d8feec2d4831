//! Navigation pane rendering

use crate::tui::app::state::{NavPosition, Page};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the navigation pane
///
/// Top items are listed from the top of the pane, bottom items are pinned
/// to its bottom edge.
pub fn render_navigation(
    f: &mut Frame,
    area: Rect,
    current: Page,
    focused: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border))
        .style(theme.nav_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let top: Vec<Page> = Page::ALL
        .into_iter()
        .filter(|p| p.position() == NavPosition::Top)
        .collect();
    let bottom: Vec<Page> = Page::ALL
        .into_iter()
        .filter(|p| p.position() == NavPosition::Bottom)
        .collect();

    let slots = top.iter().enumerate().map(|(i, page)| (inner.y + 1 + i as u16, *page));
    let bottom_start = (inner.y + inner.height).saturating_sub(1 + bottom.len() as u16);
    let slots = slots.chain(
        bottom
            .iter()
            .enumerate()
            .map(|(i, page)| (bottom_start + i as u16, *page)),
    );

    for (y, page) in slots {
        if y >= inner.y + inner.height {
            continue;
        }
        let marker = if page == current {
            Span::styled("▌", theme.accent_style())
        } else {
            Span::raw(" ")
        };
        let line = Line::from(vec![
            marker,
            Span::raw(format!("{} {}", page.icon(), page.label())),
        ]);
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };
        let paragraph =
            Paragraph::new(line).style(theme.nav_item_style(page == current, focused));
        f.render_widget(paragraph, row);
    }
}
