// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines the configured output layers with the level filter

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;
use crate::layers::{create_env_filter, create_output_layers};

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let layers = create_output_layers(&config).context("Failed to create output layers")?;

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    log_initialized(&config);
    Ok(())
}

fn log_initialized(config: &LoggingConfig) {
    tracing::debug!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        file_path = %config.file.path.display(),
        "Tinct logging initialized"
    );
}
