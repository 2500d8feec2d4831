//! Application directory path resolution
//!
//! Configuration and style resources live next to the executable:
//! - `<app dir>/config/config.json`
//! - `<app dir>/resource/styles/{light,dark}/setting_interface.yaml`

use super::schema::Appearance;
use std::path::{Path, PathBuf};

/// File name of a settings page style sheet
pub const SETTING_STYLE_FILE: &str = "setting_interface.yaml";

/// Get the directory containing the executable, or `.` if it is unknown
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration directory path
pub fn config_dir() -> PathBuf {
    app_dir().join("config")
}

/// Get the configuration file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Get the style sheet resource directory
pub fn style_dir() -> PathBuf {
    app_dir().join("resource").join("styles")
}

/// Path of the settings style sheet for `appearance` under `dir`
pub fn style_sheet_path(dir: &Path, appearance: Appearance) -> PathBuf {
    dir.join(appearance.as_str()).join(SETTING_STYLE_FILE)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = config_path();
        assert!(path.ends_with("config/config.json"));
        assert!(path.starts_with(app_dir()));
    }

    #[test]
    fn test_style_sheet_path() {
        let dir = PathBuf::from("styles");
        assert_eq!(
            style_sheet_path(&dir, Appearance::Dark),
            PathBuf::from("styles").join("dark").join(SETTING_STYLE_FILE)
        );
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();
    }
}
