//! CLI argument parsing and process setup

mod logging;

pub use logging::*;

use clap::Parser;

/// A minimal terminal application shell with persisted theme settings
#[derive(Parser, Debug)]
#[command(name = "micashell", version)]
#[command(
    about = "A minimal terminal application shell with persisted theme settings",
    long_about = None
)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,
}
