//! Command line support
//!
//! Settings resolution and logging setup shared by the `opentok` binary,
//! plus the command runner in [`commands`].

pub mod commands;

pub use commands::{Command, run_command};

use crate::{Result, Settings, config::ConfigLoader};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Options accepted by every subcommand
#[derive(Debug, Default, Clone)]
pub struct GlobalArgs {
    pub api_key: Option<u64>,
    pub api_secret: Option<String>,
    pub api_url: Option<String>,
    pub config: Option<String>,
    pub verbose: bool,
}

/// Resolve settings with precedence: flags > environment > file > defaults
///
/// Validation runs once, after the flags are applied.
pub fn load_settings(args: &GlobalArgs) -> Result<Settings> {
    let config_path = match &args.config {
        Some(config) => Some(PathBuf::from(config)),
        None => ConfigLoader::get_config_path(),
    };

    let mut settings = ConfigLoader::new().resolve(config_path.as_deref())?;

    if let Some(api_key) = args.api_key {
        settings.api.api_key = Some(api_key);
    }
    if let Some(api_secret) = &args.api_secret {
        settings.api.api_secret = Some(api_secret.clone());
    }
    if let Some(api_url) = &args.api_url {
        settings.api.api_url = api_url.clone();
    }

    settings.validate()?;
    Ok(settings)
}

/// Initialize logging to stderr
///
/// Precedence: `--verbose` (debug), then `RUST_LOG`, then `logging.level`.
pub fn init_logging(settings: &Settings, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    if settings.logging.format == "compact" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
