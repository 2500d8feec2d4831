//! Rendering tests for the window
//!
//! Render into a `TestBackend` and check the text that ends up on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use micashell::config::{ConfigDefaults, ConfigStore, MicaEnabledItem, StyleSheetLoader};
use micashell::host::StaticHost;
use micashell::links::LinkOpener;
use micashell::tui::App;
use micashell::tui::app::state::Page;
use ratatui::{Terminal, backend::TestBackend};
use std::cell::RefCell;

/// Keeps URLs instead of handing them to the browser
#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

fn create_test_app(host: StaticHost) -> (tempfile::TempDir, App) {
    let temp = tempfile::tempdir().unwrap();
    let store = ConfigStore::with_defaults(
        temp.path().join("config.json"),
        ConfigDefaults::for_host(&host),
    );
    let app = App::new(
        store,
        Box::new(host),
        Box::new(RecordingOpener::default()),
        Box::new(StyleSheetLoader::new(temp.path().join("styles"))),
    )
    .unwrap();
    (temp, app)
}

fn render(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_home_page() {
    let (_temp, mut app) = create_test_app(StaticHost::without_mica());
    let screen = render(&mut app, 100, 30);

    assert!(screen.contains("Simple Window"));
    assert!(screen.contains("Home Interface"));
    assert!(screen.contains("Home"));
    assert!(screen.contains("Settings"));
    assert!(!screen.contains("Mica effect"));
}

#[test]
fn test_settings_page_shows_every_card() {
    let (_temp, mut app) = create_test_app(StaticHost::without_mica());
    app.navigate(Page::Settings);
    let screen = render(&mut app, 120, 40);

    for text in [
        "Personalization",
        "Mica effect",
        "Apply semi transparent to windows and surfaces",
        "Application theme",
        "Use system setting",
        "Theme color",
        "#07575b",
        "About",
        "Open help page",
        "Provide feedback",
        "Check update",
    ] {
        assert!(screen.contains(text), "missing {:?} in:\n{}", text, screen);
    }
    assert!(screen.contains("Unavailable"));
}

#[test]
fn test_mica_switch_on_capable_host() {
    let (_temp, mut app) = create_test_app(StaticHost::mica_capable());
    app.navigate(Page::Settings);
    let screen = render(&mut app, 120, 40);

    assert!(!screen.contains("Unavailable"));
    assert!(screen.contains("On"));
    assert!(screen.contains("Mica"));
}

#[test]
fn test_restart_notice_is_drawn() {
    let (_temp, mut app) = create_test_app(StaticHost::mica_capable());
    app.navigate(Page::Settings);
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(!app.store().get(MicaEnabledItem));

    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("Warning"));
    assert!(screen.contains("Configuration takes effect after restart"));
    let title_row = screen.lines().next().unwrap();
    assert!(!title_row.contains("Mica"));
}

#[test]
fn test_title_bar_marks_mica() {
    let (_temp, mut app) = create_test_app(StaticHost::mica_capable());
    let screen = render(&mut app, 120, 40);
    let title_row = screen.lines().next().unwrap();
    assert!(title_row.contains("Simple Window"));
    assert!(title_row.contains("Mica"));
}

#[test]
fn test_color_dialog_is_drawn() {
    let (_temp, mut app) = create_test_app(StaticHost::without_mica());
    app.navigate(Page::Settings);
    for code in [KeyCode::Tab, KeyCode::Down, KeyCode::Down, KeyCode::Enter] {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("Choose color"));
    assert!(screen.contains("Presets"));
    assert!(screen.contains("Cancel"));
}

#[test]
fn test_small_terminal() {
    let (_temp, mut app) = create_test_app(StaticHost::without_mica());
    let screen = render(&mut app, 40, 10);
    assert!(screen.contains("Terminal too small"));
}
