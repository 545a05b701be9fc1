//! Per-platform external-process fallback for opening targets.

use crate::os::HostOsFamily;
use crate::process::{run_command, ProcessSpawner, PLACEHOLDER};
use linklaunch_core::{LaunchError, LaunchResult, ParsedUri};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// One external opener: a command name and its argument template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenerSpec {
    pub command: String,
    #[serde(default = "default_template")]
    pub args: String,
}

fn default_template() -> String {
    PLACEHOLDER.to_string()
}

impl OpenerSpec {
    pub fn new(command: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: args.into(),
        }
    }
}

/// Openers to try on each platform family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenerTable {
    pub windows: OpenerSpec,
    pub macos: OpenerSpec,
    /// Tried in order; the first one that starts wins.
    pub linux: Vec<OpenerSpec>,
}

impl Default for OpenerTable {
    fn default() -> Self {
        Self {
            windows: OpenerSpec::new("rundll32", "url.dll,FileProtocolHandler %s"),
            macos: OpenerSpec::new("open", "%s"),
            linux: vec![
                OpenerSpec::new("kde-open", "%s"),
                OpenerSpec::new("gnome-open", "%s"),
                OpenerSpec::new("xdg-open", "%s"),
            ],
        }
    }
}

/// Opens targets by spawning the platform's own "open" utility.
///
/// Success means an opener process started; whether it actually managed to
/// open the target is not observed.
pub struct ProcessFallback {
    os: HostOsFamily,
    openers: OpenerTable,
    spawner: Arc<dyn ProcessSpawner>,
}

impl ProcessFallback {
    pub fn new(os: HostOsFamily, openers: OpenerTable, spawner: Arc<dyn ProcessSpawner>) -> Self {
        Self {
            os,
            openers,
            spawner,
        }
    }

    pub fn os(&self) -> HostOsFamily {
        self.os
    }

    pub fn browse(&self, uri: &ParsedUri) -> bool {
        self.open_target(uri.as_str())
    }

    /// Paths must be valid UTF-8 without whitespace, since opener arguments are
    /// split on whitespace after substitution.
    pub fn open_path(&self, path: &Path) -> bool {
        match path.to_str() {
            Some(target) => self.open_target(target),
            None => {
                warn!(
                    "Process fallback failed: {}",
                    LaunchError::MalformedTarget(format!("non UTF-8 path {}", path.display()))
                );
                false
            }
        }
    }

    fn open_target(&self, target: &str) -> bool {
        let result = check_single_argument(target).and_then(|()| self.try_open(target));
        match result {
            Ok(opener) => {
                info!("Opened {} with {}", target, opener.command);
                true
            }
            Err(e) => {
                warn!("Process fallback failed: {}", e);
                false
            }
        }
    }

    fn try_open(&self, target: &str) -> LaunchResult<&OpenerSpec> {
        let candidates = self.candidates()?;
        candidates
            .iter()
            .find(|opener| {
                run_command(self.spawner.as_ref(), &opener.command, &opener.args, target)
            })
            .ok_or_else(|| LaunchError::OpenersExhausted(target.to_string()))
    }

    fn candidates(&self) -> LaunchResult<&[OpenerSpec]> {
        match self.os {
            HostOsFamily::MacOs => Ok(std::slice::from_ref(&self.openers.macos)),
            HostOsFamily::Windows => Ok(std::slice::from_ref(&self.openers.windows)),
            family if family.is_posix() => Ok(&self.openers.linux),
            family => Err(LaunchError::UnknownPlatform(family.to_string())),
        }
    }
}

fn check_single_argument(target: &str) -> LaunchResult<()> {
    if target.is_empty() || target.chars().any(char::is_whitespace) {
        return Err(LaunchError::MalformedTarget(format!(
            "{:?} cannot be passed as a single opener argument",
            target
        )));
    }
    Ok(())
}
