//! External command construction and fire-and-forget spawning.

use linklaunch_core::LaunchError;
use std::io;
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, info, warn};

/// Substitution marker for the target inside an argument template.
pub const PLACEHOLDER: &str = "%s";

/// Substitute `target` into `template`, split on whitespace, and put `command` first.
pub fn prepare_command(command: &str, template: &str, target: &str) -> Vec<String> {
    let formatted = template.replacen(PLACEHOLDER, target, 1);
    std::iter::once(command.to_string())
        .chain(formatted.split_whitespace().map(str::to_string))
        .collect()
}

/// Starts an external process from a prepared argument vector.
pub trait ProcessSpawner: Send + Sync {
    /// Succeeds once the process has started; never waits for it to exit.
    fn spawn(&self, argv: &[String]) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl SystemSpawner {
    /// Start `argv` and hand the child to a reaper thread; returns its pid.
    pub fn spawn_reaped(&self, argv: &[String]) -> io::Result<u32> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let pid = child.id();
        debug!("Spawned {} (pid {})", program, pid);

        let name = program.clone();
        let reaper = thread::Builder::new()
            .name(format!("reap-{}", pid))
            .spawn(move || match child.wait() {
                Ok(status) => debug!("Opener {} (pid {}) exited: {}", name, pid, status),
                Err(e) => debug!("Failed to reap opener {} (pid {}): {}", name, pid, e),
            });
        if let Err(e) = reaper {
            warn!("Could not start reaper for pid {}: {}", pid, e);
        }

        Ok(pid)
    }
}

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, argv: &[String]) -> io::Result<()> {
        self.spawn_reaped(argv).map(|_| ())
    }
}

/// Build and spawn one external command. Launch errors are logged and become `false`.
pub fn run_command(
    spawner: &dyn ProcessSpawner,
    command: &str,
    template: &str,
    target: &str,
) -> bool {
    let argv = prepare_command(command, template, target);
    match spawner.spawn(&argv) {
        Ok(()) => {
            info!("Started external opener: {:?}", argv);
            true
        }
        Err(source) => {
            let err = LaunchError::ProcessLaunch {
                command: command.to_string(),
                source,
            };
            debug!("{}", err);
            false
        }
    }
}
