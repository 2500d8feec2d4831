//! Event handling for the application
//!
//! Keys go to the color dialog first, then to the focused pane. Any
//! configuration change a key causes is dispatched before returning, so the
//! next frame already shows the new theme.

use super::core::App;
use super::state::{Focus, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Main keyboard event handler
    ///
    /// Returns `true` when the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.ui_state.should_quit = true;
            return true;
        }

        if self.settings.dialog().is_some() {
            self.settings
                .handle_key(key, &mut self.store, self.opener.as_ref());
            self.dispatch_config_events();
            return false;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return false;
            }
            KeyCode::Char('q') => {
                self.ui_state.should_quit = true;
                return true;
            }
            _ => {}
        }

        match self.ui_state.focus {
            Focus::Navigation => self.handle_navigation_key(key),
            Focus::Content => self.handle_content_key(key),
        }
        self.dispatch_config_events();
        self.ui_state.should_quit
    }

    fn toggle_focus(&mut self) {
        self.ui_state.focus = match self.ui_state.focus {
            Focus::Navigation => Focus::Content,
            Focus::Content => Focus::Navigation,
        };
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        let pages = Page::ALL;
        let current = pages
            .iter()
            .position(|p| *p == self.ui_state.page)
            .unwrap_or(0);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.navigate(pages[current.saturating_sub(1)]),
            KeyCode::Down | KeyCode::Char('j') => {
                self.navigate(pages[(current + 1).min(pages.len() - 1)]);
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
                self.ui_state.focus = Focus::Content;
            }
            KeyCode::Esc => self.ui_state.should_quit = true,
            _ => {}
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        let consumed = match self.ui_state.page {
            Page::Settings => self
                .settings
                .handle_key(key, &mut self.store, self.opener.as_ref()),
            Page::Home => false,
        };

        if !consumed && key.code == KeyCode::Esc {
            self.ui_state.focus = Focus::Navigation;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDefaults, ConfigStore, StyleSheetLoader, ThemeColorItem};
    use crate::host::StaticHost;
    use crate::links::MockLinkOpener;
    use crate::tui::App;
    use crate::tui::app::state::{Focus, Page};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_test_app() -> (tempfile::TempDir, App) {
        let temp = tempfile::tempdir().unwrap();
        let store =
            ConfigStore::with_defaults(temp.path().join("config.json"), ConfigDefaults::default());
        let app = App::new(
            store,
            Box::new(StaticHost::without_mica()),
            Box::new(MockLinkOpener::new()),
            Box::new(StyleSheetLoader::new(temp.path().join("styles"))),
        )
        .unwrap();
        (temp, app)
    }

    #[test]
    fn test_navigate_to_settings_and_back() {
        let (_temp, mut app) = create_test_app();
        assert_eq!(app.page(), Page::Home);

        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.page(), Page::Settings);
        assert_eq!(app.focus(), Focus::Navigation);

        assert!(!app.handle_key(key(KeyCode::Enter)));
        assert_eq!(app.focus(), Focus::Content);

        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert_eq!(app.focus(), Focus::Navigation);
        assert_eq!(app.page(), Page::Settings);

        assert!(app.handle_key(key(KeyCode::Esc)));
    }

    #[test]
    fn test_quit_keys() {
        let (_temp, mut app) = create_test_app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));

        let (_temp, mut app) = create_test_app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_quit());
    }

    #[test]
    fn test_dialog_swallows_quit_and_escape() {
        let (_temp, mut app) = create_test_app();
        app.navigate(Page::Settings);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Content);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.settings().dialog().is_some());

        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.settings().dialog().is_none());
        assert_eq!(app.focus(), Focus::Content);
        assert_eq!(app.store().get(ThemeColorItem).as_str(), "#07575b");
    }
}
