#![allow(dead_code)]

use linklaunch::{ActionKind, DesktopCapability, DesktopError, HostOsFamily, Launcher, ParsedUri};
use linklaunch_platform::desktop::DesktopResult;
use linklaunch_platform::{OpenerTable, ProcessFallback, ProcessSpawner};
use parking_lot::Mutex;
use std::io;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Unsupported,
    Io,
}

/// Desktop capability that records invocations instead of performing them.
#[derive(Default)]
pub struct FakeDesktop {
    supported: Vec<ActionKind>,
    failure: Option<Failure>,
    calls: Mutex<Vec<String>>,
}

impl FakeDesktop {
    pub fn supporting(actions: &[ActionKind]) -> Arc<Self> {
        Arc::new(Self {
            supported: actions.to_vec(),
            ..Self::default()
        })
    }

    pub fn failing(actions: &[ActionKind], failure: Failure) -> Arc<Self> {
        Arc::new(Self {
            supported: actions.to_vec(),
            failure: Some(failure),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) -> DesktopResult<()> {
        self.calls.lock().push(call);
        match self.failure {
            None => Ok(()),
            Some(Failure::Unsupported) => {
                Err(DesktopError::Unsupported("Simulated unsupported".to_string()))
            }
            Some(Failure::Io) => Err(DesktopError::Io(io::Error::new(
                io::ErrorKind::Other,
                "Simulated I/O error",
            ))),
        }
    }
}

impl DesktopCapability for FakeDesktop {
    fn is_supported(&self, action: ActionKind) -> bool {
        self.supported.contains(&action)
    }

    fn browse(&self, uri: &ParsedUri) -> DesktopResult<()> {
        self.record(format!("browse {}", uri))
    }

    fn mail(&self, uri: &ParsedUri) -> DesktopResult<()> {
        self.record(format!("mail {}", uri))
    }

    fn open_file(&self, path: &Path) -> DesktopResult<()> {
        self.record(format!("open_file {}", path.display()))
    }
}

/// Spawner that records argument vectors and never starts a real process.
pub struct FakeSpawner {
    succeed: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeSpawner {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            succeed: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            succeed: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }
}

impl ProcessSpawner for FakeSpawner {
    fn spawn(&self, argv: &[String]) -> io::Result<()> {
        self.calls.lock().push(argv.to_vec());
        if self.succeed {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such opener"))
        }
    }
}

pub fn launcher(os: HostOsFamily, spawner: &Arc<FakeSpawner>) -> Launcher {
    Launcher::new(ProcessFallback::new(
        os,
        OpenerTable::default(),
        spawner.clone(),
    ))
}

pub fn launcher_with(
    desktop: &Arc<FakeDesktop>,
    os: HostOsFamily,
    spawner: &Arc<FakeSpawner>,
) -> Launcher {
    launcher(os, spawner).with_desktop(desktop.clone())
}
