//! Application module
//!
//! This module contains the main window state and logic, organized into
//! sub-modules for better maintainability.

pub mod state;

mod core;
mod events;
mod rendering;

pub use core::*;
