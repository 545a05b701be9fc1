//! Host operating-system classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const POSIX_MARKERS: &[&str] = &["nix", "nux", "aix", "bsd"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOsFamily {
    Windows,
    MacOs,
    Linux,
    Unknown,
}

impl HostOsFamily {
    /// Classify a platform-name string such as `"Windows 10"` or `"Mac OS X"`.
    pub fn classify(platform: &str) -> Self {
        let name = platform.to_lowercase();
        // "darwin" contains "win", so the mac check has to run first.
        if name.contains("mac") || name.contains("darwin") {
            HostOsFamily::MacOs
        } else if name.contains("win") {
            HostOsFamily::Windows
        } else if POSIX_MARKERS.iter().any(|marker| name.contains(marker)) {
            HostOsFamily::Linux
        } else {
            HostOsFamily::Unknown
        }
    }

    /// Family of the running host, detected once per process.
    pub fn current() -> Self {
        static HOST: OnceLock<HostOsFamily> = OnceLock::new();
        *HOST.get_or_init(|| {
            let family = Self::classify(std::env::consts::OS);
            tracing::debug!("Detected host OS family: {}", family);
            family
        })
    }

    pub fn is_windows(self) -> bool {
        self == HostOsFamily::Windows
    }

    pub fn is_macos(self) -> bool {
        self == HostOsFamily::MacOs
    }

    pub fn is_linux(self) -> bool {
        self == HostOsFamily::Linux
    }

    pub fn is_posix(self) -> bool {
        matches!(self, HostOsFamily::Linux | HostOsFamily::MacOs)
    }

    pub fn name(self) -> &'static str {
        match self {
            HostOsFamily::Windows => "windows",
            HostOsFamily::MacOs => "macos",
            HostOsFamily::Linux => "linux",
            HostOsFamily::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HostOsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
