//! Host capability detection
//!
//! The Mica effect is only offered on Windows 11 (build 22000 and later). The
//! check is a pure function over [`HostInfo`]; reading the real host lives in
//! [`SystemHost`] so tests can substitute any host they like.

use std::process::Command;

/// First Windows build that supports the Mica effect
pub const MICA_MIN_BUILD: u32 = 22000;

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl OsFamily {
    /// Family of the compile target
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            _ => OsFamily::Other,
        }
    }
}

/// What the capability check knows about the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostInfo {
    pub os: OsFamily,
    /// OS build number, only read on Windows
    pub build: Option<u32>,
}

/// Whether the host can render the Mica effect
pub fn supports_mica(info: &HostInfo) -> bool {
    info.os == OsFamily::Windows && info.build.is_some_and(|build| build >= MICA_MIN_BUILD)
}

/// Host facts consumed by the configuration defaults and the views
#[cfg_attr(test, mockall::automock)]
pub trait HostCapabilities {
    fn host_info(&self) -> HostInfo;

    /// Whether the host asks for a dark appearance
    fn prefers_dark(&self) -> bool;

    fn supports_mica(&self) -> bool {
        supports_mica(&self.host_info())
    }
}

/// The machine the process runs on
///
/// The OS family and build are read once by [`SystemHost::detect`].
#[derive(Debug, Clone)]
pub struct SystemHost {
    info: HostInfo,
}

impl SystemHost {
    pub fn detect() -> Self {
        let os = OsFamily::current();
        let build = if os == OsFamily::Windows {
            windows_build()
        } else {
            None
        };
        let info = HostInfo { os, build };
        tracing::debug!(
            "Detected host {:?}, mica supported: {}",
            info,
            supports_mica(&info)
        );
        Self { info }
    }
}

impl HostCapabilities for SystemHost {
    fn host_info(&self) -> HostInfo {
        self.info
    }

    fn prefers_dark(&self) -> bool {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| parse_colorfgbg(&value))
            .unwrap_or(true)
    }
}

/// A host with fixed answers
#[derive(Debug, Clone, Copy)]
pub struct StaticHost {
    pub info: HostInfo,
    pub dark: bool,
}

impl StaticHost {
    /// A Windows 11 host
    pub fn mica_capable() -> Self {
        Self {
            info: HostInfo {
                os: OsFamily::Windows,
                build: Some(MICA_MIN_BUILD),
            },
            dark: false,
        }
    }

    /// A Linux host, which never supports Mica
    pub fn without_mica() -> Self {
        Self {
            info: HostInfo {
                os: OsFamily::Linux,
                build: None,
            },
            dark: false,
        }
    }

    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }
}

impl HostCapabilities for StaticHost {
    fn host_info(&self) -> HostInfo {
        self.info
    }

    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

fn windows_build() -> Option<u32> {
    let output = Command::new("cmd").args(["/C", "ver"]).output().ok()?;
    let text = String::from_utf8_lossy(&output.stdout);
    let build = parse_windows_build(&text);
    if build.is_none() {
        tracing::warn!("Could not read Windows build from: {}", text.trim());
    }
    build
}

/// Extract the build number from `ver` output
///
/// `Microsoft Windows [Version 10.0.22631.4037]` yields `22631`.
pub fn parse_windows_build(ver_output: &str) -> Option<u32> {
    let start = ver_output.find("Version")? + "Version".len();
    let version = ver_output[start..].trim_start().split(']').next()?;
    version.trim().split('.').nth(2)?.parse().ok()
}

/// Read a dark preference from a `COLORFGBG` value (`"fg;bg"`)
///
/// Background palette indices 7 and 9-15 are light; everything else is dark.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(!matches!(background, 7 | 9..=15))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_mica() {
        let cases = [
            (OsFamily::Windows, Some(22000), true),
            (OsFamily::Windows, Some(22631), true),
            (OsFamily::Windows, Some(19045), false),
            (OsFamily::Windows, None, false),
            (OsFamily::Linux, Some(22631), false),
            (OsFamily::MacOs, None, false),
        ];

        for (os, build, expected) in cases {
            let info = HostInfo { os, build };
            assert_eq!(supports_mica(&info), expected, "{:?}", info);
        }
    }

    #[test]
    fn test_parse_windows_build() {
        assert_eq!(
            parse_windows_build("\r\nMicrosoft Windows [Version 10.0.22631.4037]\r\n"),
            Some(22631)
        );
        assert_eq!(
            parse_windows_build("Microsoft Windows [Version 10.0.19045]"),
            Some(19045)
        );
        assert_eq!(parse_windows_build("Microsoft Windows"), None);
        assert_eq!(parse_windows_build("[Version 10.0]"), None);
    }

    #[test]
    fn test_parse_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("0;default;7"), Some(false));
        assert_eq!(parse_colorfgbg("garbage"), None);
    }

    #[test]
    fn test_static_hosts() {
        assert!(StaticHost::mica_capable().supports_mica());
        assert!(!StaticHost::without_mica().supports_mica());
        assert!(StaticHost::without_mica().with_dark(true).prefers_dark());
    }

    #[test]
    fn test_mocked_host_default_check() {
        let mut host = MockHostCapabilities::new();
        host.expect_host_info().return_const(HostInfo {
            os: OsFamily::Windows,
            build: Some(19045),
        });
        assert!(!supports_mica(&host.host_info()));
    }
}
