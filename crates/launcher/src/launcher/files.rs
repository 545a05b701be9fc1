//! Opening and editing local files with the same two-tier policy as links.

use super::Launcher;
use linklaunch_core::{ActionKind, LaunchError, LaunchResult};
use linklaunch_platform::{DesktopCapability, DesktopError};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

impl Launcher {
    pub fn open_file(&self, path: &Path) -> bool {
        self.run_file_action(path, ActionKind::OpenFile)
    }

    /// Falls back to the platform opener, which opens rather than edits.
    pub fn edit_file(&self, path: &Path) -> bool {
        self.run_file_action(path, ActionKind::EditFile)
    }

    fn run_file_action(&self, path: &Path, action: ActionKind) -> bool {
        if !path.exists() {
            let err = LaunchError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
            warn!("Cannot {} {}: {}", action, path.display(), err);
            return false;
        }

        if let Some(desktop) = self.desktop.as_deref() {
            match file_action_natively(desktop, path, action) {
                Ok(()) => return true,
                Err(e) => debug!("Native {} of {} failed: {}", action, path.display(), e),
            }
        }

        self.fallback.open_path(path)
    }
}

fn file_action_natively(
    desktop: &dyn DesktopCapability,
    path: &Path,
    action: ActionKind,
) -> LaunchResult<()> {
    if !desktop.is_supported(action) {
        return Err(LaunchError::CapabilityUnavailable(action));
    }
    match action {
        ActionKind::OpenFile => desktop.open_file(path)?,
        ActionKind::EditFile => desktop.edit_file(path)?,
        other => return Err(DesktopError::Unsupported(other.to_string()).into()),
    }
    Ok(())
}
