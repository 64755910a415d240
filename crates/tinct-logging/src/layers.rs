// ABOUTME: Layer constructors for the console, file, and JSON logging outputs
// ABOUTME: Each constructor returns None when its output is disabled in the config

use anyhow::{Context, Result};
use std::fs;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
};

use crate::config::{LoggingConfig, OutputConfig};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Create a console output layer writing to stderr.
///
/// Stdout is left alone so command output such as exported stylesheets can be
/// piped cleanly.
pub fn create_console_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.console {
        return None;
    }

    let layer = if config.pretty_console {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::CLOSE)
            .pretty()
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .boxed()
    };

    Some(layer)
}

/// Create a daily-rolling file output layer.
pub fn create_file_layer(config: &LoggingConfig) -> Result<Option<BoxedLayer>> {
    if !config.output.file {
        return Ok(None);
    }

    let path = &config.file.path;
    let directory = path
        .parent()
        .context("Log file path has no parent directory")?;
    fs::create_dir_all(directory).context(format!(
        "Failed to create log directory: {}",
        directory.display()
    ))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Invalid log file path")?;

    let file_appender = rolling::daily(directory, file_name);
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    let layer = fmt::layer()
        .with_writer(non_blocking_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .boxed();

    // The guard flushes on drop and has to live as long as the process.
    std::mem::forget(guard);

    Ok(Some(layer))
}

/// Create a JSON output layer for structured logging on stderr.
pub fn create_json_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.json {
        return None;
    }

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .boxed();

    Some(layer)
}

/// Collect every enabled output layer.
pub fn create_output_layers(config: &LoggingConfig) -> Result<Vec<BoxedLayer>> {
    let mut layers = Vec::new();

    // JSON replaces the human readable console format
    if let Some(layer) = create_json_layer(&config.output) {
        layers.push(layer);
    } else if let Some(layer) = create_console_layer(&config.output) {
        layers.push(layer);
    }

    if let Some(layer) = create_file_layer(config)? {
        layers.push(layer);
    }

    Ok(layers)
}

/// Create an environment filter from the logging configuration.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(format!("{}", config.level.0));

    for (module, level) in &config.module_levels {
        filter = filter.add_directive(format!("{}={}", module, level.0).parse()?);
    }

    Ok(filter)
}
