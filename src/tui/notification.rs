//! Transient notices shown in the corner of the window

use crate::tui::constants::NOTICE_DURATION_MS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Where a notice is anchored inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePosition {
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
    pub position: NoticePosition,
    pub duration: Duration,
    pub shown_at: Instant,
}

impl Notification {
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            position: NoticePosition::BottomRight,
            duration: Duration::from_millis(NOTICE_DURATION_MS),
            shown_at: Instant::now(),
        }
    }

    /// The notice asking the user to restart after a restart-only change
    pub fn restart_required() -> Self {
        Self::warning("Warning", "Configuration takes effect after restart")
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}
