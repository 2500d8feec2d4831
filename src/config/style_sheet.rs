//! Settings page style sheets
//!
//! A style sheet is a small YAML document of color rules for one appearance.
//! Sheets are looked up on disk first
//! (`<style dir>/<light|dark>/setting_interface.yaml`) and fall back to the
//! copies compiled into the binary. A sheet is always read in full and
//! replaces the previous one; there is no incremental patching.

use super::paths;
use super::schema::Appearance;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const BUILTIN_LIGHT: &str = include_str!("styles/light/setting_interface.yaml");
const BUILTIN_DARK: &str = include_str!("styles/dark/setting_interface.yaml");

/// Style sheet errors
#[derive(Debug, thiserror::Error)]
pub enum StyleSheetError {
    #[error("Failed to read style sheet {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse style sheet {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid color '{value}' for rule '{rule}' in {}", .path.display())]
    InvalidColor {
        path: PathBuf,
        rule: &'static str,
        value: String,
    },
}

/// Colors of the settings page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub appearance: Appearance,
    pub background: Color,
    pub label: Color,
    pub group_title: Color,
    pub card_background: Color,
    pub card_border: Color,
    pub title: Color,
    pub description: Color,
    pub disabled: Color,
}

impl StyleSheet {
    /// Values used for rules a sheet does not set
    pub fn base(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self {
                appearance,
                background: Color::Rgb(249, 249, 249),
                label: Color::Rgb(0, 0, 0),
                group_title: Color::Rgb(0, 0, 0),
                card_background: Color::Rgb(251, 251, 251),
                card_border: Color::Rgb(229, 229, 229),
                title: Color::Rgb(27, 27, 27),
                description: Color::Rgb(92, 92, 92),
                disabled: Color::Rgb(160, 160, 160),
            },
            Appearance::Dark => Self {
                appearance,
                background: Color::Rgb(39, 39, 39),
                label: Color::Rgb(255, 255, 255),
                group_title: Color::Rgb(255, 255, 255),
                card_background: Color::Rgb(45, 45, 45),
                card_border: Color::Rgb(58, 58, 58),
                title: Color::Rgb(255, 255, 255),
                description: Color::Rgb(207, 207, 207),
                disabled: Color::Rgb(110, 110, 110),
            },
        }
    }

    /// Parse a sheet for `appearance`; `origin` is only used in errors
    pub fn parse(
        contents: &str,
        appearance: Appearance,
        origin: &Path,
    ) -> Result<Self, StyleSheetError> {
        let file: SheetFile =
            serde_yaml::from_str(contents).map_err(|source| StyleSheetError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;

        let mut sheet = Self::base(appearance);
        let Some(rules) = file.setting_interface else {
            tracing::debug!("Style sheet {} has no settingInterface rules", origin.display());
            return Ok(sheet);
        };

        let mut applied = 0;
        let mut apply = |rule: &'static str,
                         value: Option<String>,
                         target: &mut Color|
         -> Result<(), StyleSheetError> {
            let Some(value) = value else {
                return Ok(());
            };
            *target = parse_color(&value).ok_or_else(|| StyleSheetError::InvalidColor {
                path: origin.to_path_buf(),
                rule,
                value,
            })?;
            applied += 1;
            Ok(())
        };

        apply("background", rules.background, &mut sheet.background)?;
        apply("label", rules.label, &mut sheet.label)?;
        apply("groupTitle", rules.group_title, &mut sheet.group_title)?;
        apply("cardBackground", rules.card_background, &mut sheet.card_background)?;
        apply("cardBorder", rules.card_border, &mut sheet.card_border)?;
        apply("title", rules.title, &mut sheet.title)?;
        apply("description", rules.description, &mut sheet.description)?;
        apply("disabled", rules.disabled, &mut sheet.disabled)?;

        tracing::debug!("Applied {} rules from {}", applied, origin.display());
        Ok(sheet)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetFile {
    setting_interface: Option<SettingRules>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingRules {
    background: Option<String>,
    label: Option<String>,
    group_title: Option<String>,
    card_background: Option<String>,
    card_border: Option<String>,
    title: Option<String>,
    description: Option<String>,
    disabled: Option<String>,
}

/// Where the settings page gets its style sheets from
#[cfg_attr(test, mockall::automock)]
pub trait StyleSheetSource {
    fn load(&self, appearance: Appearance) -> Result<StyleSheet, StyleSheetError>;
}

/// Loads style sheets from a resource directory, falling back to built-ins
#[derive(Debug, Clone)]
pub struct StyleSheetLoader {
    dir: PathBuf,
}

impl StyleSheetLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loader over the application's resource directory
    pub fn from_app_dir() -> Self {
        Self::new(paths::style_dir())
    }

    /// Source text of the sheet compiled into the binary
    pub fn builtin_source(appearance: Appearance) -> &'static str {
        match appearance {
            Appearance::Light => BUILTIN_LIGHT,
            Appearance::Dark => BUILTIN_DARK,
        }
    }

    fn load_builtin(appearance: Appearance) -> Result<StyleSheet, StyleSheetError> {
        let origin = PathBuf::from("<built-in>")
            .join(appearance.as_str())
            .join(paths::SETTING_STYLE_FILE);
        StyleSheet::parse(Self::builtin_source(appearance), appearance, &origin)
    }
}

impl StyleSheetSource for StyleSheetLoader {
    fn load(&self, appearance: Appearance) -> Result<StyleSheet, StyleSheetError> {
        let path = paths::style_sheet_path(&self.dir, appearance);
        if !path.exists() {
            return Self::load_builtin(appearance);
        }

        tracing::debug!("Loading style sheet from: {}", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|source| StyleSheetError::Read {
            path: path.clone(),
            source,
        })?;
        StyleSheet::parse(&contents, appearance, &path)
    }
}

/// Parse a color string to ratatui Color
///
/// Supports:
/// - Hex colors: #ffffff, #fff
/// - Named colors: white, black, red, green, blue, yellow, cyan, magenta
/// - Special: "default" and "transparent" leave the cell unpainted
fn parse_color(color_str: &str) -> Option<Color> {
    let color_str = color_str.trim().to_lowercase();

    match color_str.as_str() {
        "default" | "transparent" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        hex if hex.starts_with('#') => {
            let [r, g, b, _] = csscolorparser::parse(hex).ok()?.to_rgba8();
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color(" Transparent "), Some(Color::Reset));
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#f00"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#xyz"), None);
    }

    #[test]
    fn test_builtin_sheets_match_base() {
        let loader = StyleSheetLoader::new("/nonexistent/styles");
        for appearance in [Appearance::Light, Appearance::Dark] {
            let sheet = loader.load(appearance).unwrap();
            assert_eq!(sheet, StyleSheet::base(appearance));
        }
    }

    #[test]
    fn test_disk_sheet_overrides_builtin() {
        let temp = tempfile::tempdir().unwrap();
        let path = paths::style_sheet_path(temp.path(), Appearance::Dark);
        paths::ensure_dir(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            "settingInterface:\n  background: transparent\n  label: \"#ff0000\"\n",
        )
        .unwrap();

        let sheet = StyleSheetLoader::new(temp.path())
            .load(Appearance::Dark)
            .unwrap();
        assert_eq!(sheet.background, Color::Reset);
        assert_eq!(sheet.label, Color::Rgb(255, 0, 0));
        assert_eq!(sheet.title, StyleSheet::base(Appearance::Dark).title);
    }

    #[test]
    fn test_malformed_sheet_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = paths::style_sheet_path(temp.path(), Appearance::Light);
        paths::ensure_dir(path.parent().unwrap()).unwrap();

        std::fs::write(&path, "settingInterface: [unclosed").unwrap();
        let err = StyleSheetLoader::new(temp.path())
            .load(Appearance::Light)
            .unwrap_err();
        assert!(matches!(err, StyleSheetError::Parse { .. }));

        std::fs::write(&path, "settingInterface:\n  title: notacolor\n").unwrap();
        let err = StyleSheetLoader::new(temp.path())
            .load(Appearance::Light)
            .unwrap_err();
        assert!(err.to_string().contains("notacolor"));
    }
}
