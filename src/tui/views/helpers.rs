//! Common helper functions for view rendering
//!
//! This module provides reusable functions to reduce duplication across views.

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
};

/// A `width` x `height` rect centered in `area`, clamped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A `width` x `height` rect in the bottom-right corner of `area`
pub fn bottom_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

/// Shown instead of the window when the terminal cannot fit it
pub fn render_too_small(f: &mut Frame, area: Rect, min_width: u16, min_height: u16, theme: &Theme) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "Need {}x{}, have {}x{}",
            min_width, min_height, area.width, area.height
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .style(theme.warning_style())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, centered_rect(area.width, 2, area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rects_stay_inside_area() {
        let area = Rect::new(2, 3, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(12, 6, 20, 4));
        assert_eq!(centered_rect(80, 40, area), area);
        assert_eq!(bottom_right_rect(10, 2, area), Rect::new(32, 11, 10, 2));
    }
}
