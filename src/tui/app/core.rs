//! Application state and main window logic

use super::state::{Focus, Page, UIState};
use crate::config::{
    Appearance, ConfigEvent, ConfigStore, ItemChange, MicaEnabledItem, StyleSheetSource,
    ThemeColorItem, ThemeModeItem,
};
use crate::host::HostCapabilities;
use crate::links::LinkOpener;
use crate::tui::Theme;
use crate::tui::notification::Notification;
use crate::tui::settings::SettingsView;
use anyhow::{Context, Result};
use std::sync::mpsc::Receiver;
use std::time::Instant;

/// The main window
///
/// Owns the configuration store and every collaborator the views need. Mica
/// is applied at construction and again whenever the switch changes, always
/// gated by the host capability.
pub struct App {
    // Core data
    pub(crate) store: ConfigStore,
    pub(crate) theme: Theme,
    pub(crate) mica_active: bool,

    // Pages
    pub(crate) settings: SettingsView,

    // Organized state
    pub(crate) ui_state: UIState,

    // Services & infrastructure
    pub(crate) host: Box<dyn HostCapabilities>,
    pub(crate) opener: Box<dyn LinkOpener>,
    pub(crate) styles: Box<dyn StyleSheetSource>,
    events: Receiver<ConfigEvent>,
}

impl App {
    pub fn new(
        mut store: ConfigStore,
        host: Box<dyn HostCapabilities>,
        opener: Box<dyn LinkOpener>,
        styles: Box<dyn StyleSheetSource>,
    ) -> Result<Self> {
        let mica_active = store.get(MicaEnabledItem) && host.supports_mica();
        let appearance = Appearance::resolve(store.get(ThemeModeItem), host.prefers_dark());
        let theme = Theme::new(appearance, &store.get(ThemeColorItem), mica_active);
        tracing::debug!(
            "Creating window: theme={}, accent={}, mica={}",
            appearance.as_str(),
            store.get(ThemeColorItem),
            mica_active
        );

        let events = store.subscribe();
        let settings = SettingsView::new(&mut store, host.as_ref(), styles.as_ref())
            .context("Failed to load the settings style sheet")?;

        Ok(Self {
            store,
            theme,
            mica_active,
            settings,
            ui_state: UIState::default(),
            host,
            opener,
            styles,
            events,
        })
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn settings(&self) -> &SettingsView {
        &self.settings
    }

    pub fn page(&self) -> Page {
        self.ui_state.page
    }

    pub fn focus(&self) -> Focus {
        self.ui_state.focus
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.ui_state.notification.as_ref()
    }

    /// Whether the window was created with Mica
    pub fn mica_active(&self) -> bool {
        self.mica_active
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }

    /// Show `page` in the content area
    pub fn navigate(&mut self, page: Page) {
        if self.ui_state.page != page {
            tracing::debug!("Navigating to {:?}", page);
        }
        self.ui_state.page = page;
    }

    /// Replace the notice on screen
    pub fn notify(&mut self, notification: Notification) {
        tracing::debug!(
            "Notice: {} - {}",
            notification.title,
            notification.message
        );
        self.ui_state.notification = Some(notification);
    }

    /// Apply configuration changes queued since the last call
    ///
    /// The window re-applies the theme first, then the settings page reacts.
    pub fn dispatch_config_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                ConfigEvent::Changed(ItemChange::ThemeMode(mode)) => {
                    let appearance = Appearance::resolve(mode, self.host.prefers_dark());
                    self.theme.set_appearance(appearance);
                    tracing::debug!("Theme applied: {}", appearance.as_str());
                }
                ConfigEvent::Changed(ItemChange::ThemeColor(color)) => {
                    self.theme.set_accent(&color);
                    tracing::debug!("Accent applied: {}", color);
                }
                ConfigEvent::Changed(ItemChange::MicaEnabled(enabled)) => {
                    self.mica_active = enabled && self.host.supports_mica();
                    self.theme.mica = self.mica_active;
                    tracing::debug!("Mica applied: {}", self.mica_active);
                }
                ConfigEvent::RestartRequired => {}
            }
        }

        let notices = self
            .settings
            .process_events(self.host.as_ref(), self.styles.as_ref());
        for notice in notices {
            self.notify(notice);
        }
    }

    /// Drop the notice once it has been shown long enough
    pub fn tick(&mut self, now: Instant) {
        if self
            .ui_state
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.ui_state.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDefaults, StyleSheetLoader, ThemeColor, ThemeMode};
    use crate::host::StaticHost;
    use crate::links::MockLinkOpener;
    use ratatui::style::Color;
    use std::time::Duration;

    fn app_with(host: StaticHost, defaults: ConfigDefaults) -> (tempfile::TempDir, App) {
        let temp = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_defaults(temp.path().join("config.json"), defaults);
        let app = App::new(
            store,
            Box::new(host),
            Box::new(MockLinkOpener::new()),
            Box::new(StyleSheetLoader::new(temp.path().join("styles"))),
        )
        .unwrap();
        (temp, app)
    }

    #[test]
    fn test_mica_requires_host_support() {
        let defaults = ConfigDefaults {
            mica_enabled: true,
            ..ConfigDefaults::default()
        };
        let (_temp, app) = app_with(StaticHost::without_mica(), defaults.clone());
        assert!(!app.mica_active());

        let (_temp, app) = app_with(StaticHost::mica_capable(), defaults);
        assert!(app.mica_active());
        assert!(app.theme().mica);
    }

    #[test]
    fn test_mica_change_applies_live() {
        let (_temp, mut app) = app_with(StaticHost::mica_capable(), ConfigDefaults::default());
        assert!(!app.mica_active());

        app.store.set(MicaEnabledItem, true);
        app.dispatch_config_events();
        assert!(app.mica_active());
        assert!(app.theme().mica);
        assert_eq!(
            app.notification().unwrap().message,
            "Configuration takes effect after restart"
        );

        app.store.set(MicaEnabledItem, false);
        app.dispatch_config_events();
        assert!(!app.mica_active());
        assert!(!app.theme().mica);
    }

    #[test]
    fn test_mica_stays_off_on_unsupported_host() {
        let (_temp, mut app) = app_with(StaticHost::without_mica(), ConfigDefaults::default());
        app.store.set(MicaEnabledItem, true);
        app.dispatch_config_events();
        assert!(!app.mica_active());
        assert!(!app.theme().mica);
    }

    #[test]
    fn test_theme_events_apply_to_window() {
        let (_temp, mut app) = app_with(
            StaticHost::without_mica().with_dark(true),
            ConfigDefaults::default(),
        );
        assert_eq!(app.theme().appearance, Appearance::Dark);

        app.store.set(ThemeModeItem, ThemeMode::Light);
        app.store.set(ThemeColorItem, ThemeColor::new("#00ff00"));
        app.dispatch_config_events();

        assert_eq!(app.theme().appearance, Appearance::Light);
        assert_eq!(app.theme().accent, Color::Rgb(0, 255, 0));
        assert_eq!(app.settings().style().appearance, Appearance::Light);
        assert!(app.notification().is_none());
    }

    #[test]
    fn test_notice_expires() {
        let (_temp, mut app) = app_with(StaticHost::without_mica(), ConfigDefaults::default());
        app.notify(Notification::restart_required());
        let shown_at = app.notification().unwrap().shown_at;

        app.tick(shown_at + Duration::from_secs(1));
        assert!(app.notification().is_some());
        app.tick(shown_at + Duration::from_secs(5));
        assert!(app.notification().is_none());
    }
}
