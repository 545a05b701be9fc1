//! Link launch orchestration: native desktop tier, then external-process tier.

mod files;

use crate::config::LauncherConfig;
use linklaunch_core::{
    ActionKind, ApplicationType, LaunchError, LaunchOutcome, LaunchResult, LinkRequest, ParsedUri,
};
use linklaunch_platform::{
    DesktopCapability, ProcessFallback, ProcessSpawner, SystemDesktop, SystemSpawner,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Opens contact links and reports one normalized outcome per attempt.
///
/// Every launch walks the chain once: native desktop integration first, the
/// platform's opener utilities second. Nothing below this type surfaces an
/// error to the caller.
pub struct Launcher {
    desktop: Option<Arc<dyn DesktopCapability>>,
    fallback: ProcessFallback,
}

impl Launcher {
    pub fn new(fallback: ProcessFallback) -> Self {
        Self {
            desktop: None,
            fallback,
        }
    }

    /// Production launcher with the default configuration.
    pub fn for_host() -> Self {
        Self::from_config(&LauncherConfig::default())
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::from_config_with_spawner(config, Arc::new(SystemSpawner))
    }

    pub fn from_config_with_spawner(
        config: &LauncherConfig,
        spawner: Arc<dyn ProcessSpawner>,
    ) -> Self {
        let os = config.os_family();
        let mut launcher = Self::new(ProcessFallback::new(os, config.openers(), spawner));

        if config.native {
            match SystemDesktop::new() {
                Ok(desktop) => launcher.set_desktop(Arc::new(desktop)),
                Err(e) => info!("Native desktop integration unavailable: {}", e),
            }
        }

        debug!(
            "Launcher ready (os: {}, native: {})",
            os,
            launcher.has_desktop()
        );
        launcher
    }

    pub fn with_desktop(mut self, desktop: Arc<dyn DesktopCapability>) -> Self {
        self.set_desktop(desktop);
        self
    }

    /// Replace the active desktop capability.
    pub fn set_desktop(&mut self, desktop: Arc<dyn DesktopCapability>) {
        self.desktop = Some(desktop);
    }

    pub fn clear_desktop(&mut self) {
        self.desktop = None;
    }

    pub fn has_desktop(&self) -> bool {
        self.desktop.is_some()
    }

    pub fn fallback(&self) -> &ProcessFallback {
        &self.fallback
    }

    pub fn launch_email(&self, email: &str) -> LaunchOutcome {
        self.launch_request(&LinkRequest::new(email, ApplicationType::Email))
    }

    pub fn launch_telegram(&self, handle: &str) -> LaunchOutcome {
        self.launch_request(&LinkRequest::new(handle, ApplicationType::Telegram))
    }

    pub fn launch_github(&self, username: &str) -> LaunchOutcome {
        self.launch_request(&LinkRequest::new(username, ApplicationType::Github))
    }

    pub fn launch_request(&self, request: &LinkRequest) -> LaunchOutcome {
        self.launch(&request.link(), request.application_type())
    }

    /// Parse `link` and open it, folding every failure into the outcome.
    pub fn launch(&self, link: &str, application_type: ApplicationType) -> LaunchOutcome {
        let uri = match ParsedUri::parse(link) {
            Ok(uri) => uri,
            Err(e) => {
                warn!("Rejected {} link: {}", application_type, e);
                return LaunchOutcome::failed(application_type);
            }
        };

        if self.open(&uri) {
            info!("Launched {} link: {}", application_type, uri);
            LaunchOutcome::succeeded(application_type)
        } else {
            warn!("Failed to launch {} link: {}", application_type, uri);
            LaunchOutcome::failed(application_type)
        }
    }

    fn open(&self, uri: &ParsedUri) -> bool {
        if self.attempt_native(uri) {
            return true;
        }
        debug!("Falling back to external opener for {}", uri);
        self.fallback.browse(uri)
    }

    /// Native tier only: mail links go to the mail action, everything else to browse.
    pub fn attempt_native(&self, uri: &ParsedUri) -> bool {
        let Some(desktop) = self.desktop.as_deref() else {
            debug!("No native desktop integration; skipping native tier");
            return false;
        };

        match open_natively(desktop, uri) {
            Ok(()) => true,
            Err(e) => {
                debug!("Native open of {} failed: {}", uri, e);
                false
            }
        }
    }

    /// What the active desktop capability reports; `false` when there is none.
    pub fn is_action_supported(&self, action: ActionKind) -> bool {
        self.desktop
            .as_deref()
            .is_some_and(|desktop| desktop.is_supported(action))
    }

    pub fn is_action_supported_by_name(&self, name: &str) -> bool {
        match name.parse::<ActionKind>() {
            Ok(action) => self.is_action_supported(action),
            Err(e) => {
                debug!("{}", e);
                false
            }
        }
    }
}

fn open_natively(desktop: &dyn DesktopCapability, uri: &ParsedUri) -> LaunchResult<()> {
    if uri.is_mail() && desktop.is_supported(ActionKind::Mail) {
        desktop.mail(uri)?;
    } else if desktop.is_supported(ActionKind::Browse) {
        desktop.browse(uri)?;
    } else {
        let action = if uri.is_mail() {
            ActionKind::Mail
        } else {
            ActionKind::Browse
        };
        return Err(LaunchError::CapabilityUnavailable(action));
    }
    Ok(())
}
