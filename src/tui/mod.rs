//! TUI module
//!
//! Provides the terminal user interface: a single window with a navigation
//! pane, a home page and a settings page.

pub mod app;
pub mod constants;
pub mod keybindings;
pub mod notification;
pub mod settings;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use crate::config::{ConfigStore, StyleSheetSource};
use crate::host::HostCapabilities;
use crate::links::LinkOpener;
use anyhow::Result;
use constants::POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI application until the user quits
pub fn run_tui(
    store: ConfigStore,
    host: Box<dyn HostCapabilities>,
    opener: Box<dyn LinkOpener>,
    styles: Box<dyn StyleSheetSource>,
) -> Result<()> {
    tracing::debug!("Initializing TUI");

    // Build the window before touching the terminal so startup errors print normally
    let mut app = App::new(store, host, opener, styles)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::debug!("TUI initialized, entering main loop");
    let result = run_loop(&mut terminal, &mut app);

    tracing::debug!("TUI shutting down");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        // Handle input events (non-blocking)
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
