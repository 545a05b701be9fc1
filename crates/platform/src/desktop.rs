//! Native desktop integration behind a swappable capability trait.

use crate::os::HostOsFamily;
use linklaunch_core::{ActionKind, LaunchError, ParsedUri};
use std::ffi::OsStr;
use std::path::Path;

const SESSION_VARS: &[&str] = &["DISPLAY", "WAYLAND_DISPLAY"];

#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error("Operation not supported: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DesktopResult<T> = Result<T, DesktopError>;

impl From<DesktopError> for LaunchError {
    fn from(err: DesktopError) -> Self {
        match err {
            DesktopError::Unsupported(what) => LaunchError::Unsupported(what),
            DesktopError::Io(e) => LaunchError::Io(e),
        }
    }
}

/// What the host's desktop integration can do.
///
/// The launcher holds one of these; tests swap in a fake.
pub trait DesktopCapability: Send + Sync {
    fn is_supported(&self, action: ActionKind) -> bool;

    fn browse(&self, uri: &ParsedUri) -> DesktopResult<()>;

    fn mail(&self, uri: &ParsedUri) -> DesktopResult<()>;

    fn open_file(&self, path: &Path) -> DesktopResult<()> {
        Err(DesktopError::Unsupported(format!(
            "open_file: {}",
            path.display()
        )))
    }

    fn edit_file(&self, path: &Path) -> DesktopResult<()> {
        Err(DesktopError::Unsupported(format!(
            "edit_file: {}",
            path.display()
        )))
    }
}

/// Desktop integration backed by the host's default handlers (`open` crate).
#[derive(Debug, Clone, Copy)]
pub struct SystemDesktop {
    os: HostOsFamily,
}

impl SystemDesktop {
    /// Fails with `Unsupported` when the host has no desktop session to talk to.
    pub fn new() -> DesktopResult<Self> {
        Self::for_host(HostOsFamily::current(), has_display_session())
    }

    fn for_host(os: HostOsFamily, has_session: bool) -> DesktopResult<Self> {
        match os {
            HostOsFamily::Unknown => Err(DesktopError::Unsupported(
                "desktop integration unavailable on unknown platform".to_string(),
            )),
            HostOsFamily::Linux if !has_session => Err(DesktopError::Unsupported(
                "no graphical session".to_string(),
            )),
            _ => Ok(Self { os }),
        }
    }

    pub fn os(&self) -> HostOsFamily {
        self.os
    }

    fn ensure_supported(&self, action: ActionKind) -> DesktopResult<()> {
        if self.is_supported(action) {
            Ok(())
        } else {
            Err(DesktopError::Unsupported(action.to_string()))
        }
    }
}

impl DesktopCapability for SystemDesktop {
    fn is_supported(&self, action: ActionKind) -> bool {
        matches!(
            action,
            ActionKind::Browse | ActionKind::Mail | ActionKind::OpenFile
        )
    }

    fn browse(&self, uri: &ParsedUri) -> DesktopResult<()> {
        self.ensure_supported(ActionKind::Browse)?;
        open_detached(uri.as_str())
    }

    fn mail(&self, uri: &ParsedUri) -> DesktopResult<()> {
        self.ensure_supported(ActionKind::Mail)?;
        open_detached(uri.as_str())
    }

    fn open_file(&self, path: &Path) -> DesktopResult<()> {
        self.ensure_supported(ActionKind::OpenFile)?;
        open_detached(path)
    }
}

fn open_detached(target: impl AsRef<OsStr>) -> DesktopResult<()> {
    open::that_detached(target)?;
    Ok(())
}

fn has_display_session() -> bool {
    SESSION_VARS
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()))
}
