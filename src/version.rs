//! OS version lookup and response formatting

use sysinfo::System;

/// Well-known channel name shared with callers. Changing it breaks
/// compatibility with anything already configured to reach this server.
pub const CHANNEL_NAME: &str = "platform_version";

/// Fixed label for the OS family this binary was compiled for.
#[cfg(target_os = "linux")]
pub const PLATFORM_LABEL: &str = "Linux";
#[cfg(target_os = "macos")]
pub const PLATFORM_LABEL: &str = "macOS";
#[cfg(target_os = "windows")]
pub const PLATFORM_LABEL: &str = "Windows";
#[cfg(target_os = "freebsd")]
pub const PLATFORM_LABEL: &str = "FreeBSD";
#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "windows",
    target_os = "freebsd"
)))]
pub const PLATFORM_LABEL: &str = "Unknown";

/// Reports the version string the operating system currently advertises.
///
/// Queried fresh on every call; implementations and callers must not cache.
pub trait OsVersionSource: Send + Sync {
    fn os_version(&self) -> Option<String>;
}

/// Production source backed by `sysinfo`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemVersionSource;

impl OsVersionSource for SystemVersionSource {
    fn os_version(&self) -> Option<String> {
        System::os_version()
    }
}

/// Build the response for a version query: `"<platform> <version>"`.
///
/// A source that reports no version degrades to an `"unknown"` suffix so the
/// response stays non-empty and label-prefixed.
pub fn platform_version_string(source: &dyn OsVersionSource) -> String {
    let version = source
        .os_version()
        .unwrap_or_else(|| "unknown".to_string());
    format!("{} {}", PLATFORM_LABEL, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedVersion(&'static str);

    impl OsVersionSource for FixedVersion {
        fn os_version(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    struct NoVersion;

    impl OsVersionSource for NoVersion {
        fn os_version(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_exact_concatenation() {
        assert_eq!(
            platform_version_string(&FixedVersion("17.0")),
            format!("{} 17.0", PLATFORM_LABEL)
        );
    }

    #[test]
    fn test_missing_version_falls_back() {
        assert_eq!(
            platform_version_string(&NoVersion),
            format!("{} unknown", PLATFORM_LABEL)
        );
    }

    #[test]
    fn test_system_source_reports_something() {
        let response = platform_version_string(&SystemVersionSource);
        assert!(response.starts_with(&format!("{} ", PLATFORM_LABEL)));
        assert!(response.len() > PLATFORM_LABEL.len() + 1);
    }
}
