//! Change notifications emitted by the configuration store

use super::schema::{ThemeColor, ThemeMode};

/// New value of an item after an accepted write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemChange {
    MicaEnabled(bool),
    ThemeMode(ThemeMode),
    ThemeColor(ThemeColor),
}

/// Event delivered to every store subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    /// An item took a new value
    Changed(ItemChange),
    /// An item that only applies after a restart was changed
    RestartRequired,
}
