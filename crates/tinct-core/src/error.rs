// ABOUTME: Error types for token store, style root and preference storage operations
// ABOUTME: Distinguishes programmer errors, rejected input and backing-file failures

use std::path::PathBuf;
use thiserror::Error;
use tinct_types::TokenKind;

pub type Result<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Preset index {index} out of range (have {len} presets)")]
    PresetOutOfRange { index: usize, len: usize },

    #[error("Radius must be a finite number of pixels, got {0}")]
    InvalidRadius(f64),

    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Invalid {kind} value for {variable}: {value:?}")]
    InvalidValue {
        variable: String,
        kind: TokenKind,
        value: String,
    },

    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TokenError {
    pub fn invalid_value(variable: &str, kind: TokenKind, value: &str) -> Self {
        Self::InvalidValue {
            variable: variable.to_string(),
            kind,
            value: value.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Rejected user input, as opposed to a programmer or environment error
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRadius(_)
                | Self::InvalidValue { .. }
                | Self::InvalidHex(_)
        )
    }
}
