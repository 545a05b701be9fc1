//! Launcher configuration loaded from YAML.

use linklaunch_platform::process::PLACEHOLDER;
use linklaunch_platform::{HostOsFamily, OpenerSpec, OpenerTable};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Overrides the configured platform name when set.
pub const PLATFORM_ENV: &str = "LINKLAUNCH_PLATFORM";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Try native desktop integration before external openers.
    pub native: bool,
    /// Platform name used instead of the detected host, e.g. `"Linux"`.
    pub platform: Option<String>,
    pub linux_openers: Vec<OpenerSpec>,
    pub windows_opener: OpenerSpec,
    pub macos_opener: OpenerSpec,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        let openers = OpenerTable::default();
        Self {
            native: true,
            platform: None,
            linux_openers: openers.linux,
            windows_opener: openers.windows,
            macos_opener: openers.macos,
        }
    }
}

impl LauncherConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::Invalid(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(ConfigError::Invalid("Config file is empty".to_string()));
        }

        let config = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded launcher config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_env_overrides(self) -> Self {
        let platform = std::env::var(PLATFORM_ENV).ok();
        self.with_platform_override(platform)
    }

    pub fn with_platform_override(mut self, platform: Option<String>) -> Self {
        if let Some(platform) = platform.filter(|p| !p.trim().is_empty()) {
            self.platform = Some(platform);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.linux_openers.is_empty() {
            return Err(ConfigError::Invalid(
                "linux_openers must list at least one opener".to_string(),
            ));
        }

        let all = self
            .linux_openers
            .iter()
            .chain([&self.windows_opener, &self.macos_opener]);
        for opener in all {
            validate_opener(opener)?;
        }
        Ok(())
    }

    /// Platform family the process fallback dispatches on.
    pub fn os_family(&self) -> HostOsFamily {
        self.platform
            .as_deref()
            .map(HostOsFamily::classify)
            .unwrap_or_else(HostOsFamily::current)
    }

    pub fn openers(&self) -> OpenerTable {
        OpenerTable {
            windows: self.windows_opener.clone(),
            macos: self.macos_opener.clone(),
            linux: self.linux_openers.clone(),
        }
    }
}

fn validate_opener(opener: &OpenerSpec) -> Result<(), ConfigError> {
    let command = opener.command.trim();
    if command.is_empty() {
        return Err(ConfigError::Invalid("opener command cannot be empty".to_string()));
    }
    if command.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!(
            "opener command must be a single program name: {}",
            opener.command
        )));
    }
    if !opener.args.contains(PLACEHOLDER) {
        return Err(ConfigError::Invalid(format!(
            "opener template for {} must contain {}",
            opener.command, PLACEHOLDER
        )));
    }
    Ok(())
}
