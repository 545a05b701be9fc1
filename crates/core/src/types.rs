use crate::error::ParseNameError;
use crate::uri::build_link;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const EMAIL_PREFIX: &str = "mailto:";
const TELEGRAM_PREFIX: &str = "https://t.me/";
const GITHUB_PREFIX: &str = "http://github.com/";

const TELEGRAM_NOTE: &str =
    "Note: the Telegram desktop app must be installed for Telegram links to open correctly.";

/// Kind of external application a contact link targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    Email,
    Telegram,
    Github,
}

impl ApplicationType {
    pub const ALL: [ApplicationType; 3] = [
        ApplicationType::Email,
        ApplicationType::Telegram,
        ApplicationType::Github,
    ];

    /// Fixed link prefix for this application type.
    pub fn prefix(self) -> &'static str {
        match self {
            ApplicationType::Email => EMAIL_PREFIX,
            ApplicationType::Telegram => TELEGRAM_PREFIX,
            ApplicationType::Github => GITHUB_PREFIX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplicationType::Email => "EMAIL",
            ApplicationType::Telegram => "TELEGRAM",
            ApplicationType::Github => "GITHUB",
        }
    }

    pub fn success_message(self) -> String {
        let message = format!("Launched {} successfully.", self.label());
        match self {
            ApplicationType::Telegram => format!("{message}\n{TELEGRAM_NOTE}"),
            _ => message,
        }
    }

    pub fn failure_message(self) -> String {
        format!("Failed to launch {}.", self.label())
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationType {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "mail" => Ok(ApplicationType::Email),
            "telegram" => Ok(ApplicationType::Telegram),
            "github" => Ok(ApplicationType::Github),
            _ => Err(ParseNameError::new("application type", s)),
        }
    }
}

/// Abstract desktop action, independent of whichever facility performs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Browse,
    Mail,
    OpenFile,
    EditFile,
    Print,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Browse,
        ActionKind::Mail,
        ActionKind::OpenFile,
        ActionKind::EditFile,
        ActionKind::Print,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Browse => "browse",
            ActionKind::Mail => "mail",
            ActionKind::OpenFile => "open_file",
            ActionKind::EditFile => "edit_file",
            ActionKind::Print => "print",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browse" => Ok(ActionKind::Browse),
            "mail" => Ok(ActionKind::Mail),
            "open" | "open_file" => Ok(ActionKind::OpenFile),
            "edit" | "edit_file" => Ok(ActionKind::EditFile),
            "print" => Ok(ActionKind::Print),
            _ => Err(ParseNameError::new("action", s)),
        }
    }
}

/// A raw identifier paired with the application it should open in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    raw_target: String,
    application_type: ApplicationType,
}

impl LinkRequest {
    pub fn new(raw_target: impl Into<String>, application_type: ApplicationType) -> Self {
        Self {
            raw_target: raw_target.into(),
            application_type,
        }
    }

    pub fn raw_target(&self) -> &str {
        &self.raw_target
    }

    pub fn application_type(&self) -> ApplicationType {
        self.application_type
    }

    /// Full link string: the type's prefix followed by the raw target.
    pub fn link(&self) -> String {
        build_link(&self.raw_target, self.application_type)
    }
}

/// Normalized result of one launch attempt.
///
/// The message is user-facing; underlying causes are only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchOutcome {
    success: bool,
    message: String,
}

impl LaunchOutcome {
    pub fn succeeded(application_type: ApplicationType) -> Self {
        Self {
            success: true,
            message: application_type.success_message(),
        }
    }

    pub fn failed(application_type: ApplicationType) -> Self {
        Self {
            success: false,
            message: application_type.failure_message(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_per_type() {
        assert_eq!(ApplicationType::Email.prefix(), "mailto:");
        assert_eq!(ApplicationType::Telegram.prefix(), "https://t.me/");
        assert_eq!(ApplicationType::Github.prefix(), "http://github.com/");
    }

    #[test]
    fn test_success_message_names_type() {
        for app in ApplicationType::ALL {
            let outcome = LaunchOutcome::succeeded(app);
            assert!(outcome.is_success());
            assert!(outcome.message().contains(app.label()));
        }
    }

    #[test]
    fn test_only_telegram_carries_note() {
        assert!(ApplicationType::Telegram
            .success_message()
            .contains("Telegram desktop app"));
        assert!(!ApplicationType::Email.success_message().contains("Note:"));
        assert!(!ApplicationType::Github.success_message().contains("Note:"));
    }

    #[test]
    fn test_failure_message_has_no_detail() {
        let outcome = LaunchOutcome::failed(ApplicationType::Github);
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Failed to launch GITHUB.");
    }

    #[test]
    fn test_action_kind_names() {
        assert_eq!("browse".parse::<ActionKind>().unwrap(), ActionKind::Browse);
        assert_eq!("OPEN".parse::<ActionKind>().unwrap(), ActionKind::OpenFile);
        assert_eq!("edit_file".parse::<ActionKind>().unwrap(), ActionKind::EditFile);
        assert!("scan".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_application_type_names() {
        assert_eq!(
            "Telegram".parse::<ApplicationType>().unwrap(),
            ApplicationType::Telegram
        );
        let err = "fax".parse::<ApplicationType>().unwrap_err();
        assert_eq!(err.value, "fax");
    }

    #[test]
    fn test_link_request_builds_link() {
        let request = LinkRequest::new("alice", ApplicationType::Telegram);
        assert_eq!(request.link(), "https://t.me/alice");
        assert_eq!(request.raw_target(), "alice");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = LaunchOutcome::failed(ApplicationType::Email);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Failed to launch EMAIL.");
    }
}
