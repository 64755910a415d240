// ABOUTME: End to end tests running tinct commands against temporary state files
// ABOUTME: Each test gets its own style root, preferences and optional stylesheet


use std::path::Path;

use crate::cli::Cli;
use crate::config::{PathsConfig, ThemeConfig, TinctConfig};
use clap::Parser;

pub(crate) fn test_config(dir: &Path) -> TinctConfig {
    TinctConfig {
        paths: PathsConfig {
            style_root: dir.join("style-root.json"),
            preferences: dir.join("preferences.json"),
            stylesheet: None,
        },
        theme: ThemeConfig::default(),
    }
}

/// Parse `args` as a command line and run it, returning what it printed
pub(crate) fn run_command(config: &TinctConfig, args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("tinct").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    crate::commands::run(&cli.command, config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

pub(crate) fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("state file should exist");
    serde_json::from_str(&content).expect("state file should be JSON")
}
