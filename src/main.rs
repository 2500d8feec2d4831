//! micashell - a minimal terminal application shell
//!
//! Opens a single window with a home page and a settings page. Theme mode,
//! accent color and the Mica effect are persisted to a JSON file next to the
//! executable.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Args, init_logging};
use micashell::config::{ConfigDefaults, ConfigStore, StyleSheetLoader, paths};
use micashell::host::SystemHost;
use micashell::links::SystemBrowser;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging if debug flag is set
    let log_file = init_logging(args.debug);

    // Print log file location to stderr before starting TUI (so it doesn't interfere)
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let host = SystemHost::detect();
    let defaults = ConfigDefaults::for_host(&host);
    let store = ConfigStore::load(paths::config_path(), defaults);

    micashell::tui::run_tui(
        store,
        Box::new(host),
        Box::new(SystemBrowser),
        Box::new(StyleSheetLoader::from_app_dir()),
    )
}
