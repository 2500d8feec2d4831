//! The configuration store
//!
//! Owns every configuration item, persists them to the config file on each
//! accepted write and notifies subscribers of the change. All work happens on
//! the caller's thread: when [`ConfigStore::set`] returns, the file has been
//! written and every subscriber has the event in its queue.

use super::defaults::ConfigDefaults;
use super::events::{ConfigEvent, ItemChange};
use super::item::{BoolValidator, ColorValidator, ConfigItem, OptionsValidator};
use super::loader::ConfigLoader;
use super::schema::{ThemeColor, ThemeMode};
use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

pub const GROUP_MAIN_WINDOW: &str = "MainWindow";
pub const GROUP_PERSONALIZATION: &str = "Personalization";

/// Typed handle selecting one item of the store
pub trait ItemKey: Copy {
    type Value: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned;

    fn item(store: &ConfigStore) -> &ConfigItem<Self::Value>;

    #[doc(hidden)]
    fn item_mut(store: &mut ConfigStore) -> &mut ConfigItem<Self::Value>;

    /// Change event describing `value`
    fn change(value: &Self::Value) -> ItemChange;
}

/// `MainWindow.MicaEnabled`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicaEnabledItem;

/// `Personalization.ThemeMode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeModeItem;

/// `Personalization.ThemeColor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColorItem;

impl ItemKey for MicaEnabledItem {
    type Value = bool;

    fn item(store: &ConfigStore) -> &ConfigItem<bool> {
        &store.mica_enabled
    }

    fn item_mut(store: &mut ConfigStore) -> &mut ConfigItem<bool> {
        &mut store.mica_enabled
    }

    fn change(value: &bool) -> ItemChange {
        ItemChange::MicaEnabled(*value)
    }
}

impl ItemKey for ThemeModeItem {
    type Value = ThemeMode;

    fn item(store: &ConfigStore) -> &ConfigItem<ThemeMode> {
        &store.theme_mode
    }

    fn item_mut(store: &mut ConfigStore) -> &mut ConfigItem<ThemeMode> {
        &mut store.theme_mode
    }

    fn change(value: &ThemeMode) -> ItemChange {
        ItemChange::ThemeMode(*value)
    }
}

impl ItemKey for ThemeColorItem {
    type Value = ThemeColor;

    fn item(store: &ConfigStore) -> &ConfigItem<ThemeColor> {
        &store.theme_color
    }

    fn item_mut(store: &mut ConfigStore) -> &mut ConfigItem<ThemeColor> {
        &mut store.theme_color
    }

    fn change(value: &ThemeColor) -> ItemChange {
        ItemChange::ThemeColor(value.clone())
    }
}

/// Application settings backed by a JSON file
pub struct ConfigStore {
    path: PathBuf,
    mica_enabled: ConfigItem<bool>,
    theme_mode: ConfigItem<ThemeMode>,
    theme_color: ConfigItem<ThemeColor>,
    dirty: bool,
    subscribers: Vec<Sender<ConfigEvent>>,
}

impl ConfigStore {
    /// Create a store holding `defaults`, without touching the disk
    pub fn with_defaults(path: impl Into<PathBuf>, defaults: ConfigDefaults) -> Self {
        Self {
            path: path.into(),
            mica_enabled: ConfigItem::new(
                GROUP_MAIN_WINDOW,
                "MicaEnabled",
                defaults.mica_enabled,
                BoolValidator,
            )
            .requiring_restart(),
            theme_mode: ConfigItem::new(
                GROUP_PERSONALIZATION,
                "ThemeMode",
                defaults.theme_mode,
                OptionsValidator::new(ThemeMode::ALL),
            ),
            theme_color: ConfigItem::new(
                GROUP_PERSONALIZATION,
                "ThemeColor",
                defaults.theme_color,
                ColorValidator,
            ),
            dirty: false,
            subscribers: Vec::new(),
        }
    }

    /// Load the store from the config file at `path`
    ///
    /// Keys missing from the file keep `defaults`; unknown keys and invalid
    /// values are ignored. An unreadable or malformed file yields the defaults.
    /// A missing file is created.
    pub fn load(path: impl Into<PathBuf>, defaults: ConfigDefaults) -> Self {
        let mut store = Self::with_defaults(path, defaults);

        match ConfigLoader::load_file(&store.path) {
            Ok(document) => {
                tracing::debug!("Loading configuration from {}", store.path.display());
                store.apply_document(&document);
            }
            Err(_) if !store.path.exists() => {
                tracing::debug!(
                    "No configuration at {}, writing defaults",
                    store.path.display()
                );
                if let Err(e) = store.save() {
                    tracing::warn!("Failed to create configuration file: {:#}", e);
                }
            }
            Err(e) => {
                tracing::warn!("Using default configuration: {:#}", e);
            }
        }

        store
    }

    /// Current value of an item
    pub fn get<K: ItemKey>(&self, _key: K) -> K::Value {
        K::item(self).value().clone()
    }

    /// The item itself, for its metadata
    pub fn item<K: ItemKey>(&self, _key: K) -> &ConfigItem<K::Value> {
        K::item(self)
    }

    /// Write a new value
    ///
    /// Invalid values are rejected and `false` is returned. Writing the current
    /// value is accepted and does nothing. Otherwise the value is stored, the
    /// whole configuration is written to disk and subscribers are notified.
    pub fn set<K: ItemKey>(&mut self, _key: K, value: K::Value) -> bool {
        let item = K::item_mut(self);
        if item.value() == &value {
            return true;
        }

        let name = item.full_key();
        if !item.assign(value) {
            tracing::debug!("Rejected invalid value for {}", name);
            return false;
        }
        let restart = item.restart_required();
        let change = K::change(item.value());
        tracing::debug!("{} changed: {:?}", name, change);

        self.dirty = true;
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist configuration: {:#}", e);
        }

        self.emit(ConfigEvent::Changed(change));
        if restart {
            self.emit(ConfigEvent::RestartRequired);
        }
        true
    }

    /// Register a listener for change events
    pub fn subscribe(&mut self) -> Receiver<ConfigEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Write every item to the config file
    pub fn save(&mut self) -> Result<()> {
        ConfigLoader::save(&self.to_document(), &self.path)?;
        self.dirty = false;
        Ok(())
    }

    /// The document [`ConfigStore::save`] writes
    pub fn to_document(&self) -> Value {
        let mut document = Map::new();
        write_item(&self.mica_enabled, &mut document);
        write_item(&self.theme_mode, &mut document);
        write_item(&self.theme_color, &mut document);
        Value::Object(document)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether an accepted write has not reached the disk yet
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn apply_document(&mut self, document: &Value) {
        read_item(&mut self.mica_enabled, document);
        read_item(&mut self.theme_mode, document);
        read_item(&mut self.theme_color, document);
    }

    fn emit(&mut self, event: ConfigEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("path", &self.path)
            .field("mica_enabled", &self.mica_enabled)
            .field("theme_mode", &self.theme_mode)
            .field("theme_color", &self.theme_color)
            .field("dirty", &self.dirty)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn read_item<T>(item: &mut ConfigItem<T>, document: &Value)
where
    T: Clone + PartialEq + fmt::Debug + DeserializeOwned,
{
    let Some(raw) = document
        .get(item.group())
        .and_then(|group| group.get(item.key()))
    else {
        return;
    };

    match serde_json::from_value::<T>(raw.clone()) {
        Ok(value) => {
            if !item.assign(value) {
                tracing::debug!("Ignoring invalid {} in config file: {}", item.full_key(), raw);
            }
        }
        Err(e) => {
            tracing::debug!("Ignoring malformed {} in config file: {}", item.full_key(), e);
        }
    }
}

fn write_item<T: Serialize>(item: &ConfigItem<T>, document: &mut Map<String, Value>) {
    let group = document
        .entry(item.group())
        .or_insert_with(|| Value::Object(Map::new()));
    match serde_json::to_value(item.value()) {
        Ok(value) => {
            if let Value::Object(entries) = group {
                entries.insert(item.key().to_string(), value);
            }
        }
        Err(e) => tracing::warn!("Failed to serialize {}.{}: {}", item.group(), item.key(), e),
    }
}
