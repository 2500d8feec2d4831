//! Configuration value types
//!
//! Defines the typed values stored in configuration items and how they are
//! written to the configuration file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default accent color of the application
pub const DEFAULT_THEME_COLOR: &str = "#07575b";

/// Theme mode selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host preference
    #[default]
    #[serde(rename = "Auto", alias = "SystemDefault")]
    SystemDefault,
}

impl ThemeMode {
    /// All modes in the order they are offered to the user
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::SystemDefault];

    /// Human-readable label used by the settings page
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::SystemDefault => "Use system setting",
        }
    }
}

/// Resolved light/dark value of a [`ThemeMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Resolve a theme mode against the host preference
    pub fn resolve(mode: ThemeMode, host_prefers_dark: bool) -> Self {
        match mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::SystemDefault => {
                if host_prefers_dark {
                    Appearance::Dark
                } else {
                    Appearance::Light
                }
            }
        }
    }

    /// Directory name of the style sheets for this appearance
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

/// Accent color as written by the user (hex string)
///
/// The string is kept as entered so that a value read back equals the value
/// written. Validity is checked by the item validator, not by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColor(String);

impl ThemeColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the string is a `#rgb`, `#rrggbb` or `#rrggbbaa` color
    pub fn is_valid_hex(&self) -> bool {
        let Some(digits) = self.0.strip_prefix('#') else {
            return false;
        };
        matches!(digits.len(), 3 | 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit())
            && csscolorparser::parse(&self.0).is_ok()
    }

    /// RGB components, or `None` when the string is not a color
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        let color = csscolorparser::parse(&self.0).ok()?;
        let [r, g, b, _] = color.to_rgba8();
        Some((r, g, b))
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::new(DEFAULT_THEME_COLOR)
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::SystemDefault).unwrap(),
            "\"Auto\""
        );
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"Dark\"");

        let mode: ThemeMode = serde_json::from_str("\"SystemDefault\"").unwrap();
        assert_eq!(mode, ThemeMode::SystemDefault);
        assert!(serde_json::from_str::<ThemeMode>("\"Sepia\"").is_err());
    }

    #[test]
    fn test_appearance_resolution() {
        assert_eq!(Appearance::resolve(ThemeMode::Light, true), Appearance::Light);
        assert_eq!(Appearance::resolve(ThemeMode::Dark, false), Appearance::Dark);
        assert_eq!(
            Appearance::resolve(ThemeMode::SystemDefault, true),
            Appearance::Dark
        );
        assert_eq!(
            Appearance::resolve(ThemeMode::SystemDefault, false),
            Appearance::Light
        );
    }

    #[test]
    fn test_theme_color_hex_validation() {
        assert!(ThemeColor::new("#07575b").is_valid_hex());
        assert!(ThemeColor::new("#f00").is_valid_hex());
        assert!(ThemeColor::new("#ff000080").is_valid_hex());
        assert!(!ThemeColor::new("red").is_valid_hex());
        assert!(!ThemeColor::new("#ff00").is_valid_hex());
        assert!(!ThemeColor::new("#gg0000").is_valid_hex());
        assert!(!ThemeColor::new("").is_valid_hex());
    }

    #[test]
    fn test_theme_color_rgb() {
        assert_eq!(ThemeColor::new("#ff0000").to_rgb(), Some((255, 0, 0)));
        assert_eq!(ThemeColor::default().to_rgb(), Some((7, 87, 91)));
        assert_eq!(ThemeColor::new("not a color").to_rgb(), None);
    }
}
