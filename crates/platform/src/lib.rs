//! Host-facing layer of the link launcher.
//!
//! - OS detection
//! - Native desktop integration (capability trait + host implementation)
//! - External command construction and spawning
//! - Per-platform process fallback

pub mod desktop;
pub mod fallback;
pub mod os;
pub mod process;

pub use desktop::{DesktopCapability, DesktopError, DesktopResult, SystemDesktop};
pub use fallback::{OpenerSpec, OpenerTable, ProcessFallback};
pub use os::HostOsFamily;
pub use process::{prepare_command, run_command, ProcessSpawner, SystemSpawner};
