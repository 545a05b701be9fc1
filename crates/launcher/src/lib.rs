//! Application-link launcher.
//!
//! Opens contact links (mail compose, chat deep links, profile pages) through
//! the host's native desktop integration, falling back to the platform's own
//! opener utilities, and folds every failure into one [`LaunchOutcome`].

pub mod config;
pub mod launcher;

pub use config::{ConfigError, LauncherConfig, PLATFORM_ENV};
pub use launcher::Launcher;
pub use linklaunch_core::{ActionKind, ApplicationType, LaunchOutcome, LinkRequest, ParsedUri};
pub use linklaunch_platform::{DesktopCapability, DesktopError, HostOsFamily, ProcessFallback};
