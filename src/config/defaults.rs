//! Default configuration values
//!
//! The Mica default depends on the host, so defaults are computed once from a
//! [`HostCapabilities`] before the store is built.

use super::schema::{ThemeColor, ThemeMode};
use crate::host::HostCapabilities;

/// Compiled-in values used for every item missing from the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDefaults {
    pub mica_enabled: bool,
    pub theme_mode: ThemeMode,
    pub theme_color: ThemeColor,
}

impl ConfigDefaults {
    /// Defaults for the given host
    pub fn for_host(host: &dyn HostCapabilities) -> Self {
        Self {
            mica_enabled: host.supports_mica(),
            ..Self::default()
        }
    }
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            mica_enabled: false,
            theme_mode: ThemeMode::default(),
            theme_color: ThemeColor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    #[test]
    fn test_default_config() {
        let defaults = ConfigDefaults::default();
        assert!(!defaults.mica_enabled);
        assert_eq!(defaults.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(defaults.theme_color.as_str(), "#07575b");
    }

    #[test]
    fn test_mica_default_follows_host() {
        assert!(ConfigDefaults::for_host(&StaticHost::mica_capable()).mica_enabled);
        assert!(!ConfigDefaults::for_host(&StaticHost::without_mica()).mica_enabled);
    }
}
