// ABOUTME: Command line arguments for the tinct binary
// ABOUTME: One subcommand per token store operation plus a color preview helper

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tinct_types::ThemeMode;

#[derive(Debug, Parser)]
#[command(name = "tinct")]
#[command(about = "Edit CSS design tokens, color presets and radius from the terminal")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to <config dir>/tinct/tinct.toml)
    #[arg(long, global = true, env = "TINCT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List tokens grouped by category
    List {
        /// Only show this category, e.g. "Spacing"
        #[arg(long)]
        category: Option<String>,
    },

    /// List the built-in color presets with preview swatches
    Presets {
        /// Mode to show swatches for
        #[arg(long)]
        mode: Option<ThemeMode>,
    },

    /// Apply a color preset and remember it
    ApplyPreset {
        /// Zero-based preset index, see `tinct presets`
        index: usize,

        /// Mode to apply for (defaults to the stored theme)
        #[arg(long)]
        mode: Option<ThemeMode>,
    },

    /// Set the base radius in pixels (0-20)
    Radius {
        #[arg(allow_negative_numbers = true)]
        px: f64,
    },

    /// Set a token to a CSS value. Variables may omit the leading dashes.
    Set { variable: String, value: String },

    /// Set a color token from a #rrggbb value
    SetHex { variable: String, hex: String },

    /// Adjust single channels of an oklch() color token
    Adjust {
        variable: String,

        /// Lightness, 0-1
        #[arg(long)]
        lightness: Option<f64>,

        /// Chroma, 0-0.3
        #[arg(long)]
        chroma: Option<f64>,

        /// Hue in degrees, 0-360
        #[arg(long)]
        hue: Option<f64>,
    },

    /// Reset a token to its stylesheet value
    Reset { variable: String },

    /// Drop all token edits and re-apply the stored preset and radius
    Restore,

    /// Print the current tokens as a :root block
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the approximate #rrggbb preview of a color expression
    Preview { expr: String },
}
