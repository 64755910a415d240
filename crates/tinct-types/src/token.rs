// ABOUTME: Design token data types read from and written to the style root
// ABOUTME: A token pairs a CSS custom property with its current and default value

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of value a token holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Color,
    Spacing,
    Radius,
    Shadow,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Spacing => "spacing",
            TokenKind::Radius => "radius",
            TokenKind::Shadow => "shadow",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named design variable bound to a custom property on the style root.
///
/// `variable` is unique within a token set. `default_value` is captured when
/// the token is first materialized and is what [`ThemeToken::reset`] restores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeToken {
    /// Human readable label, e.g. "Primary Foreground"
    pub name: String,
    /// Custom property name including the leading dashes, e.g. "--primary"
    pub variable: String,
    pub value: String,
    pub default_value: String,
    pub kind: TokenKind,
    pub category: String,
}

impl ThemeToken {
    /// Materialize a token whose value and default are both `value`.
    pub fn new(
        name: impl Into<String>,
        variable: impl Into<String>,
        value: impl Into<String>,
        kind: TokenKind,
        category: impl Into<String>,
    ) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            variable: variable.into(),
            default_value: value.clone(),
            value,
            kind,
            category: category.into(),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.value != self.default_value
    }

    pub fn reset(&mut self) {
        self.value.clone_from(&self.default_value);
    }
}
