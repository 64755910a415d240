// ABOUTME: Color preset definitions bundling base colors for light and dark modes
// ABOUTME: Presets are process-wide constants and never mutated

use crate::theme::ThemeMode;
use serde::Serialize;

/// The three base colors a preset overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTriple {
    pub primary: &'static str,
    pub accent: &'static str,
    pub secondary: &'static str,
}

impl ColorTriple {
    /// `(variable, value)` pairs in write order
    pub fn entries(&self) -> [(&'static str, &'static str); 3] {
        [
            ("--primary", self.primary),
            ("--accent", self.accent),
            ("--secondary", self.secondary),
        ]
    }
}

/// A named bundle of base color tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPreset {
    pub name: &'static str,
    pub light: ColorTriple,
    pub dark: ColorTriple,
}

impl ColorPreset {
    pub fn colors(&self, mode: ThemeMode) -> &ColorTriple {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}
