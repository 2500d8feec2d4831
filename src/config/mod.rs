//! Configuration system for micashell
//!
//! Settings are typed items grouped by section, stored in a single JSON file
//! next to the executable. Every accepted write is persisted immediately and
//! broadcast to subscribers so views can re-apply the affected visuals.

mod defaults;
pub mod events;
pub mod item;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod store;
pub mod style_sheet;

pub use defaults::ConfigDefaults;
pub use events::{ConfigEvent, ItemChange};
pub use item::{BoolValidator, ColorValidator, ConfigItem, OptionsValidator, Validator};
pub use loader::ConfigLoader;
pub use schema::{Appearance, DEFAULT_THEME_COLOR, ThemeColor, ThemeMode};
pub use store::{ConfigStore, ItemKey, MicaEnabledItem, ThemeColorItem, ThemeModeItem};
pub use style_sheet::{StyleSheet, StyleSheetError, StyleSheetLoader, StyleSheetSource};
