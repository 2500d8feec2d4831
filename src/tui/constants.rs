//! Constants used throughout the TUI module
//!
//! This module centralizes magic numbers and strings to reduce duplication
//! and make values easier to maintain.

/// Title of the main window
pub const WINDOW_TITLE: &str = "Simple Window";

/// How long a notice stays on screen, in milliseconds
pub const NOTICE_DURATION_MS: u64 = 5000;

/// Input poll interval of the main loop, in milliseconds
pub const POLL_INTERVAL_MS: u64 = 100;

/// Minimum terminal size required for the TUI
pub const MIN_TERMINAL_WIDTH: u16 = 60;
pub const MIN_TERMINAL_HEIGHT: u16 = 16;

/// Width of the navigation pane
pub const NAV_WIDTH: u16 = 20;

/// Height of the title bar
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Footer height: one line of hints plus borders
pub const FOOTER_HEIGHT: u16 = 3;

/// Card layout on the settings page
pub const CARD_HEIGHT: u16 = 4;
pub const GROUP_TITLE_HEIGHT: u16 = 2;
pub const PAGE_HEADING_HEIGHT: u16 = 2;

/// Notice box size
pub const NOTICE_WIDTH: u16 = 46;
pub const NOTICE_HEIGHT: u16 = 4;

/// Color dialog size
pub const COLOR_DIALOG_WIDTH: u16 = 50;
pub const COLOR_DIALOG_HEIGHT: u16 = 10;
