//! Theme and styling definitions
//!
//! The theme is applied process-wide: every view reads its colors from the
//! single [`Theme`] owned by the window. Changing the theme mode swaps the
//! palette, changing the theme color swaps the accent, and the Mica effect
//! leaves window surfaces unpainted so the terminal background shows through.

use crate::config::{Appearance, ThemeColor};
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub appearance: Appearance,
    pub accent: Color,
    /// Whether window surfaces are left translucent
    pub mica: bool,

    // Window colors
    pub window_bg: Color,
    pub title_bar_bg: Color,
    pub nav_bg: Color,
    pub nav_hover_bg: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_on_accent: Color,

    // Notification colors
    pub notice_warning: Color,
    pub notice_error: Color,

    // Footer colors
    pub footer_key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Appearance::Dark, &ThemeColor::default(), false)
    }
}

impl Theme {
    pub fn new(appearance: Appearance, accent: &ThemeColor, mica: bool) -> Self {
        let mut theme = Self {
            appearance,
            accent: accent_color(accent).unwrap_or(Color::Cyan),
            mica,
            window_bg: Color::Reset,
            title_bar_bg: Color::Reset,
            nav_bg: Color::Reset,
            nav_hover_bg: Color::Reset,
            border: Color::Reset,
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            text_on_accent: Color::White,
            notice_warning: Color::Yellow,
            notice_error: Color::Red,
            footer_key: Color::Yellow,
        };
        theme.set_appearance(appearance);
        theme
    }

    /// Swap the palette for another appearance, keeping the accent
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        match appearance {
            Appearance::Light => {
                self.window_bg = Color::Rgb(243, 243, 243);
                self.title_bar_bg = Color::Rgb(232, 232, 232);
                self.nav_bg = Color::Rgb(238, 238, 238);
                self.nav_hover_bg = Color::Rgb(222, 222, 222);
                self.border = Color::Rgb(204, 204, 204);
                self.text_primary = Color::Rgb(0, 0, 0);
                self.text_secondary = Color::Rgb(96, 96, 96);
                self.notice_warning = Color::Rgb(157, 93, 0);
                self.notice_error = Color::Rgb(196, 43, 28);
                self.footer_key = Color::Rgb(157, 93, 0);
            }
            Appearance::Dark => {
                self.window_bg = Color::Rgb(32, 32, 32);
                self.title_bar_bg = Color::Rgb(24, 24, 24);
                self.nav_bg = Color::Rgb(28, 28, 28);
                self.nav_hover_bg = Color::Rgb(50, 50, 50);
                self.border = Color::Rgb(70, 70, 70);
                self.text_primary = Color::Rgb(255, 255, 255);
                self.text_secondary = Color::Rgb(200, 200, 200);
                self.notice_warning = Color::Rgb(252, 225, 0);
                self.notice_error = Color::Rgb(255, 153, 164);
                self.footer_key = Color::Yellow;
            }
        }
    }

    /// Swap the accent color; a color that does not parse is ignored
    pub fn set_accent(&mut self, accent: &ThemeColor) {
        match accent_color(accent) {
            Some(color) => self.accent = color,
            None => tracing::warn!("Ignoring unparseable accent color {}", accent),
        }
    }

    /// `color`, or the terminal background when Mica is active
    pub fn surface(&self, color: Color) -> Color {
        if self.mica { Color::Reset } else { color }
    }

    // Helper methods for common style combinations

    pub fn window_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.surface(self.window_bg))
    }

    pub fn title_bar_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.surface(self.title_bar_bg))
    }

    pub fn nav_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.surface(self.nav_bg))
    }

    pub fn nav_item_style(&self, selected: bool, focused: bool) -> Style {
        let style = self.nav_style();
        match (selected, focused) {
            (true, true) => style.bg(self.nav_hover_bg).add_modifier(Modifier::BOLD),
            (true, false) => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_button_style(&self) -> Style {
        Style::default()
            .fg(self.text_on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }

    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.notice_warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.notice_error)
            .add_modifier(Modifier::BOLD)
    }
}

fn accent_color(color: &ThemeColor) -> Option<Color> {
    color.to_rgb().map(|(r, g, b)| Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_swap_keeps_accent() {
        let mut theme = Theme::new(Appearance::Light, &ThemeColor::new("#ff0000"), false);
        assert_eq!(theme.window_bg, Color::Rgb(243, 243, 243));

        theme.set_appearance(Appearance::Dark);
        assert_eq!(theme.appearance, Appearance::Dark);
        assert_eq!(theme.window_bg, Color::Rgb(32, 32, 32));
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_invalid_accent_is_ignored() {
        let mut theme = Theme::default();
        theme.set_accent(&ThemeColor::new("#0000ff"));
        theme.set_accent(&ThemeColor::new("nope"));
        assert_eq!(theme.accent, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_mica_leaves_surfaces_unpainted() {
        let theme = Theme::new(Appearance::Dark, &ThemeColor::default(), true);
        assert_eq!(theme.window_style().bg, Some(Color::Reset));

        let theme = Theme::new(Appearance::Dark, &ThemeColor::default(), false);
        assert_eq!(theme.window_style().bg, Some(Color::Rgb(32, 32, 32)));
    }
}
