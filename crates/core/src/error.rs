use crate::types::ActionKind;
use thiserror::Error;

/// Every way a launch attempt can fail below the orchestrator.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Malformed target: {0}")]
    MalformedTarget(String),

    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(ActionKind),

    #[error("Operation not supported: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to launch {command}: {source}")]
    ProcessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No opener known for platform: {0}")]
    UnknownPlatform(String),

    #[error("All openers failed for {0}")]
    OpenersExhausted(String),
}

pub type LaunchResult<T> = Result<T, LaunchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
