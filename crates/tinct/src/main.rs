// ABOUTME: Entry point for the tinct command line theme token editor
// ABOUTME: Sets up logging, loads configuration and dispatches the subcommand

mod cli;
mod commands;
mod config;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;
use crate::config::TinctConfig;

fn setup_logging(verbosity: u8) -> Result<()> {
    use tinct_logging::{LoggingConfig, init_logging_with_config, level_for_verbosity};

    let mut config = LoggingConfig {
        level: level_for_verbosity(0).into(),
        ..LoggingConfig::default()
    };
    config
        .apply_env_overrides()
        .context("Failed to apply logging overrides from environment")?;

    // An explicit -v wins over the environment
    if verbosity > 0 {
        config.level = level_for_verbosity(verbosity).into();
    }

    init_logging_with_config(config).context("Failed to initialize tinct logging")?;
    tinct_logging::debug!("Tinct logging system initialized");

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("failed to initialize logging")?;

    let config = TinctConfig::load(cli.config.as_deref())?;
    tinct_logging::debug!(
        style_root = %config.paths.style_root.display(),
        preferences = %config.paths.preferences.display(),
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &config, &mut out)
}
