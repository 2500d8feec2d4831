//! External links and application metadata shown on the settings page

pub const HELP_URL: &str = "https://github.com/rudymohammadbali/";
pub const FEEDBACK_URL: &str = "https://github.com/rudymohammadbali/";

pub const YEAR: u16 = 2024;
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hands URLs to whatever opens them
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener {
    /// Fire-and-forget: the outcome is not reported back
    fn open(&self, url: &str);
}

/// Opens URLs in the host's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) {
        match open::that_detached(url) {
            Ok(()) => tracing::debug!("Opened {}", url),
            Err(e) => tracing::debug!("Failed to open {}: {}", url, e),
        }
    }
}

/// Copyright line of the About card
pub fn about_text() -> String {
    format!("© Copyright {}, {}. Version {}", YEAR, AUTHOR, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_text() {
        let text = about_text();
        assert!(text.starts_with("© Copyright 2024, "));
        assert!(text.ends_with(VERSION));
    }
}
