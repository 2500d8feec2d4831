//! Tests for the persisted configuration store
//!
//! Exercise the store against real files in a temporary directory.

use insta::assert_snapshot;
use micashell::config::{
    ConfigDefaults, ConfigStore, MicaEnabledItem, ThemeColor, ThemeColorItem, ThemeMode,
    ThemeModeItem,
};
use micashell::host::StaticHost;
use std::fs;

fn config_path(temp: &tempfile::TempDir) -> std::path::PathBuf {
    temp.path().join("config").join("config.json")
}

#[test]
fn test_values_survive_a_restart() {
    let temp = tempfile::tempdir().unwrap();
    let path = config_path(&temp);

    let mut store = ConfigStore::load(&path, ConfigDefaults::default());
    assert!(store.set(MicaEnabledItem, true));
    assert!(store.set(ThemeModeItem, ThemeMode::Dark));
    assert!(store.set(ThemeColorItem, ThemeColor::new("#123abc")));
    drop(store);

    let store = ConfigStore::load(&path, ConfigDefaults::default());
    assert!(store.get(MicaEnabledItem));
    assert_eq!(store.get(ThemeModeItem), ThemeMode::Dark);
    assert_eq!(store.get(ThemeColorItem).as_str(), "#123abc");
}

#[test]
fn test_missing_file_is_created_with_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let path = config_path(&temp);
    let defaults = ConfigDefaults::for_host(&StaticHost::mica_capable());

    let store = ConfigStore::load(&path, defaults);
    assert!(store.get(MicaEnabledItem));
    assert_eq!(store.get(ThemeModeItem), ThemeMode::SystemDefault);
    assert_eq!(store.get(ThemeColorItem).as_str(), "#07575b");

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, store.to_document());
}

#[test]
fn test_fresh_install_without_mica_support() {
    let temp = tempfile::tempdir().unwrap();
    let defaults = ConfigDefaults::for_host(&StaticHost::without_mica());

    let store = ConfigStore::load(config_path(&temp), defaults);
    assert!(!store.get(MicaEnabledItem));
}

#[test]
fn test_malformed_file_yields_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let path = config_path(&temp);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    let store = ConfigStore::load(&path, ConfigDefaults::default());
    assert_eq!(store.get(ThemeModeItem), ThemeMode::SystemDefault);
    assert_eq!(store.get(ThemeColorItem), ThemeColor::default());

    // Left alone until the next accepted write
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_unknown_and_invalid_entries_are_ignored() {
    let temp = tempfile::tempdir().unwrap();
    let path = config_path(&temp);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r##"{
            "MainWindow": { "MicaEnabled": true, "Width": 800 },
            "Personalization": { "ThemeMode": "SystemDefault", "ThemeColor": "teal" },
            "Plugins": { "Enabled": [] }
        }"##,
    )
    .unwrap();

    let store = ConfigStore::load(&path, ConfigDefaults::default());
    assert!(store.get(MicaEnabledItem));
    assert_eq!(store.get(ThemeModeItem), ThemeMode::SystemDefault);
    assert_eq!(store.get(ThemeColorItem), ThemeColor::default());
}

#[test]
fn test_persisted_document_layout() {
    let temp = tempfile::tempdir().unwrap();
    let path = config_path(&temp);

    let mut store = ConfigStore::load(&path, ConfigDefaults::default());
    store.set(ThemeColorItem, ThemeColor::new("#ff0000"));

    assert_snapshot!(fs::read_to_string(&path).unwrap(), @r##"
    {
      "MainWindow": {
        "MicaEnabled": false
      },
      "Personalization": {
        "ThemeColor": "#ff0000",
        "ThemeMode": "Auto"
      }
    }
    "##);
}
