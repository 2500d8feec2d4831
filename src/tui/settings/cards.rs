//! Setting cards
//!
//! A card is one row of the settings page: an icon, a title, a description
//! and a control. Controls bound to a configuration item read and write the
//! store directly; they never cache the value they display.

use crate::config::{
    ConfigStore, ItemKey, MicaEnabledItem, ThemeColor, ThemeColorItem, ThemeModeItem,
};

/// What a push button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    OpenUrl(&'static str),
    /// Accepted but does nothing
    CheckUpdate,
}

/// On/off control bound to a boolean item
#[derive(Debug, Clone, Copy)]
pub struct SwitchCard<K> {
    pub item: K,
}

impl<K: ItemKey<Value = bool>> SwitchCard<K> {
    pub fn is_checked(&self, store: &ConfigStore) -> bool {
        store.get(self.item)
    }

    pub fn toggle(&self, store: &mut ConfigStore) -> bool {
        let checked = self.is_checked(store);
        store.set(self.item, !checked)
    }
}

/// Radio group bound to an item with a fixed set of values
#[derive(Debug, Clone)]
pub struct OptionsCard<K: ItemKey> {
    pub item: K,
    pub options: Vec<(K::Value, &'static str)>,
}

impl<K: ItemKey> OptionsCard<K> {
    /// Index of the stored value among the options
    pub fn selected_index(&self, store: &ConfigStore) -> Option<usize> {
        let current = store.get(self.item);
        self.options.iter().position(|(value, _)| *value == current)
    }

    pub fn select(&self, store: &mut ConfigStore, index: usize) -> bool {
        match self.options.get(index) {
            Some((value, _)) => store.set(self.item, value.clone()),
            None => false,
        }
    }

    /// Select the option after the current one, wrapping around
    pub fn select_next(&self, store: &mut ConfigStore) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let next = self
            .selected_index(store)
            .map_or(0, |i| (i + 1) % self.options.len());
        self.select(store, next)
    }

    /// Select the option before the current one, wrapping around
    pub fn select_previous(&self, store: &mut ConfigStore) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let len = self.options.len();
        let previous = self.selected_index(store).map_or(0, |i| (i + len - 1) % len);
        self.select(store, previous)
    }
}

/// Default/custom color choice bound to a color item
#[derive(Debug, Clone, Copy)]
pub struct ColorCard<K> {
    pub item: K,
}

impl<K: ItemKey<Value = ThemeColor>> ColorCard<K> {
    pub fn current(&self, store: &ConfigStore) -> ThemeColor {
        store.get(self.item)
    }

    /// Whether the stored color differs from the item default
    pub fn uses_custom(&self, store: &ConfigStore) -> bool {
        &store.get(self.item) != store.item(self.item).default_value()
    }

    pub fn use_default(&self, store: &mut ConfigStore) -> bool {
        let default = store.item(self.item).default_value().clone();
        store.set(self.item, default)
    }

    pub fn apply(&self, store: &mut ConfigStore, color: ThemeColor) -> bool {
        store.set(self.item, color)
    }

    pub fn is_valid(&self, store: &ConfigStore, color: &ThemeColor) -> bool {
        store.item(self.item).is_valid(color)
    }
}

/// Button that opens a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyperlinkCard {
    pub text: &'static str,
    pub url: &'static str,
}

/// Button that runs an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushCard {
    pub text: &'static str,
    pub action: CardAction,
}

#[derive(Debug, Clone)]
pub enum CardControl {
    Switch(SwitchCard<MicaEnabledItem>),
    Options(OptionsCard<ThemeModeItem>),
    Color(ColorCard<ThemeColorItem>),
    Hyperlink(HyperlinkCard),
    Push(PushCard),
}

#[derive(Debug, Clone)]
pub struct SettingCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: String,
    pub control: CardControl,
    /// Disabled cards are shown but ignore activation
    pub enabled: bool,
}

impl SettingCard {
    pub fn new(
        icon: &'static str,
        title: &'static str,
        content: impl Into<String>,
        control: CardControl,
    ) -> Self {
        Self {
            icon,
            title,
            content: content.into(),
            control,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Titled list of cards
#[derive(Debug, Clone)]
pub struct SettingCardGroup {
    pub title: &'static str,
    pub cards: Vec<SettingCard>,
}
