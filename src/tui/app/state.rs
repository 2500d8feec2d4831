//! Application state structures
//!
//! This module contains state sub-structures that organize the App's fields
//! into logical groupings.

use crate::tui::notification::Notification;

/// Pages reachable from the navigation pane
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Settings,
}

/// Where a navigation item is pinned
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavPosition {
    Top,
    Bottom,
}

impl Page {
    /// Navigation order: top items first, then bottom items
    pub const ALL: [Page; 2] = [Page::Home, Page::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "⌂",
            Page::Settings => "⚙",
        }
    }

    pub fn position(&self) -> NavPosition {
        match self {
            Page::Home => NavPosition::Top,
            Page::Settings => NavPosition::Bottom,
        }
    }
}

/// Which pane receives keys
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Navigation,
    Content,
}

/// UI-related state (navigation, focus, notices)
#[derive(Debug)]
pub struct UIState {
    /// Page shown in the content area
    pub page: Page,
    pub focus: Focus,
    /// Notice currently on screen
    pub notification: Option<Notification>,
    pub should_quit: bool,
    /// Cached terminal size to detect resizes
    pub cached_terminal_size: Option<(u16, u16)>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            focus: Focus::Navigation,
            notification: None,
            should_quit: false,
            cached_terminal_size: None,
        }
    }
}
