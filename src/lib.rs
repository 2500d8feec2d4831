//! micashell library
//!
//! This library provides the core functionality of the micashell application.
//! It can be used both as a binary and as a library for testing.

pub mod config;
pub mod host;
pub mod links;
pub mod tui;

// Re-export commonly used types for convenience
pub use config::{ConfigDefaults, ConfigEvent, ConfigStore, ItemChange};
pub use host::{HostCapabilities, StaticHost, SystemHost};
pub use links::{LinkOpener, SystemBrowser};
