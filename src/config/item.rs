//! Configuration items and their validators

use super::schema::ThemeColor;
use std::fmt;

/// Decides whether a value may be stored in a [`ConfigItem`]
pub trait Validator<T> {
    fn validate(&self, value: &T) -> bool;
}

/// Accepts any boolean
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolValidator;

impl Validator<bool> for BoolValidator {
    fn validate(&self, _value: &bool) -> bool {
        true
    }
}

/// Accepts one of a fixed list of options
#[derive(Debug, Clone)]
pub struct OptionsValidator<T> {
    options: Vec<T>,
}

impl<T: PartialEq> OptionsValidator<T> {
    pub fn new(options: impl IntoIterator<Item = T>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }
}

impl<T: PartialEq> Validator<T> for OptionsValidator<T> {
    fn validate(&self, value: &T) -> bool {
        self.options.contains(value)
    }
}

/// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa` colors
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorValidator;

impl Validator<ThemeColor> for ColorValidator {
    fn validate(&self, value: &ThemeColor) -> bool {
        value.is_valid_hex()
    }
}

/// A single setting identified by `(group, key)`
///
/// The current value always satisfies the validator.
pub struct ConfigItem<T> {
    group: &'static str,
    key: &'static str,
    default: T,
    value: T,
    validator: Box<dyn Validator<T>>,
    restart: bool,
}

impl<T: Clone + PartialEq> ConfigItem<T> {
    /// Create an item whose current value is its default
    ///
    /// An invalid default is a programming error and is caught in debug builds.
    pub fn new(
        group: &'static str,
        key: &'static str,
        default: T,
        validator: impl Validator<T> + 'static,
    ) -> Self {
        debug_assert!(
            validator.validate(&default),
            "default value of {}.{} fails its validator",
            group,
            key
        );
        Self {
            group,
            key,
            value: default.clone(),
            default,
            validator: Box::new(validator),
            restart: false,
        }
    }

    /// Mark the item as taking effect only after a restart
    pub fn requiring_restart(mut self) -> Self {
        self.restart = true;
        self
    }

    /// Store `value` if it passes the validator
    ///
    /// Returns `false` and leaves the current value untouched otherwise.
    pub(crate) fn assign(&mut self, value: T) -> bool {
        if !self.validator.validate(&value) {
            return false;
        }
        self.value = value;
        true
    }
}

impl<T> ConfigItem<T> {
    pub fn group(&self) -> &'static str {
        self.group
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Dotted name used in log output
    pub fn full_key(&self) -> String {
        format!("{}.{}", self.group, self.key)
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn restart_required(&self) -> bool {
        self.restart
    }

    pub fn is_valid(&self, value: &T) -> bool {
        self.validator.validate(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ConfigItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigItem")
            .field("group", &self.group)
            .field("key", &self.key)
            .field("value", &self.value)
            .field("default", &self.default)
            .field("restart", &self.restart)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ThemeMode;

    #[test]
    fn test_options_validator() {
        let validator = OptionsValidator::new([ThemeMode::Light, ThemeMode::Dark]);
        assert!(validator.validate(&ThemeMode::Light));
        assert!(!validator.validate(&ThemeMode::SystemDefault));
        assert_eq!(validator.options().len(), 2);
    }

    #[test]
    fn test_color_validator() {
        assert!(ColorValidator.validate(&ThemeColor::new("#ff0000")));
        assert!(!ColorValidator.validate(&ThemeColor::new("blue")));
    }

    #[test]
    fn test_assign_rejects_invalid_value() {
        let mut item = ConfigItem::new("Group", "Color", ThemeColor::default(), ColorValidator);
        assert!(!item.assign(ThemeColor::new("#zzzzzz")));
        assert_eq!(item.value(), &ThemeColor::default());

        assert!(item.assign(ThemeColor::new("#123456")));
        assert_eq!(item.value().as_str(), "#123456");
        assert_eq!(item.default_value(), &ThemeColor::default());
    }

    #[test]
    fn test_restart_flag() {
        let item = ConfigItem::new("MainWindow", "MicaEnabled", false, BoolValidator);
        assert!(!item.restart_required());
        let item = item.requiring_restart();
        assert!(item.restart_required());
        assert_eq!(item.full_key(), "MainWindow.MicaEnabled");
    }
}
