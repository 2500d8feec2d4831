//! Centralized keybindings
//!
//! This module provides a single source of truth for the key hints shown in
//! the footer, depending on what currently has focus.

/// Key hint with keybinding and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCommand {
    /// The keybinding string (e.g., "j/k", "Enter")
    pub key: &'static str,
    /// The human-readable label (e.g., "Navigate", "Select")
    pub label: &'static str,
}

impl NavigationCommand {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Which part of the window receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Navigation,
    Content,
    Dialog,
}

/// Hints for a context, in the order they should appear
pub fn get_navigation_commands(context: KeyContext) -> Vec<NavigationCommand> {
    match context {
        KeyContext::Navigation => vec![
            NavigationCommand::new("j/k", "Navigate"),
            NavigationCommand::new("Enter", "Open"),
            NavigationCommand::new("Tab", "Focus content"),
            NavigationCommand::new("q", "Quit"),
        ],
        KeyContext::Content => vec![
            NavigationCommand::new("j/k", "Navigate"),
            NavigationCommand::new("Enter", "Activate"),
            NavigationCommand::new("←/→", "Change"),
            NavigationCommand::new("Tab", "Focus navigation"),
            NavigationCommand::new("Esc", "Back"),
            NavigationCommand::new("q", "Quit"),
        ],
        KeyContext::Dialog => vec![
            NavigationCommand::new("0-9a-f", "Type"),
            NavigationCommand::new("←/→", "Presets"),
            NavigationCommand::new("Enter", "OK"),
            NavigationCommand::new("Esc", "Cancel"),
        ],
    }
}
