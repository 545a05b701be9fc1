use anyhow::{Context, Result};
use linklaunch::{ActionKind, ApplicationType, Launcher, LauncherConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{parse_args, Command, USAGE};

const DEFAULT_LOG_FILTER: &str = "linklaunch=info,linklaunch_platform=info";

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args).context(USAGE)?;

    let config = match &cli.config {
        Some(path) => {
            info!("Using launcher config {}", path.display());
            LauncherConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => LauncherConfig::default(),
    }
    .with_env_overrides();

    match cli.command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Probe => {
            let launcher = Launcher::from_config(&config);
            println!("Platform: {}", config.os_family());
            println!(
                "Native desktop: {}",
                if launcher.has_desktop() { "available" } else { "unavailable" }
            );
            for action in ActionKind::ALL {
                println!("  {:<10} {}", action, launcher.is_action_supported(action));
            }
            Ok(())
        }
        Command::Launch(application_type, identifier) => {
            let launcher = Launcher::from_config(&config);
            let outcome = match application_type {
                ApplicationType::Email => launcher.launch_email(&identifier),
                ApplicationType::Telegram => launcher.launch_telegram(&identifier),
                ApplicationType::Github => launcher.launch_github(&identifier),
            };

            info!(
                "{} launch for {} finished (success: {})",
                application_type,
                identifier,
                outcome.is_success()
            );

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.message());
            }

            if !outcome.is_success() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
