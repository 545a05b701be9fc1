//! Core types for the application-link launcher.
//!
//! This crate holds the pieces every other layer agrees on:
//! - Application types and the fixed link prefix each one uses
//! - Abstract desktop actions a host may or may not support
//! - The validated URI form handed to the invocation layers
//! - The normalized launch outcome returned to callers

pub mod error;
pub mod types;
pub mod uri;

pub use error::{LaunchError, LaunchResult, ParseNameError};
pub use types::{ActionKind, ApplicationType, LaunchOutcome, LinkRequest};
pub use uri::{build_link, ParsedUri};
