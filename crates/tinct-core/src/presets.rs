// ABOUTME: Built-in color presets and the semantic colors derived from them
// ABOUTME: Derivation is a pure function of the primary color's lightness and chroma

use serde::{Deserialize, Serialize};
use tinct_types::{ColorPreset, ColorTriple, ThemeMode};

use crate::color::{Oklch, approximate_to_rgb};
use crate::error::{Result, TokenError};

/// Built-in presets, indexed by their persisted position
pub static PRESETS: [ColorPreset; 5] = [
    ColorPreset {
        name: "Default",
        light: ColorTriple {
            primary: "oklch(0.205 0 0)",
            accent: "oklch(0.97 0 0)",
            secondary: "oklch(0.97 0 0)",
        },
        dark: ColorTriple {
            primary: "oklch(0.922 0 0)",
            accent: "oklch(0.269 0 0)",
            secondary: "oklch(0.269 0 0)",
        },
    },
    ColorPreset {
        name: "Violet",
        light: ColorTriple {
            primary: "oklch(0.488 0.243 264.376)",
            accent: "oklch(0.77 0.143 280)",
            secondary: "oklch(0.89 0.07 280)",
        },
        dark: ColorTriple {
            primary: "oklch(0.77 0.143 280)",
            accent: "oklch(0.3 0.1 280)",
            secondary: "oklch(0.3 0.1 280)",
        },
    },
    ColorPreset {
        name: "Blue",
        light: ColorTriple {
            primary: "oklch(0.5 0.2 240)",
            accent: "oklch(0.8 0.15 240)",
            secondary: "oklch(0.92 0.05 240)",
        },
        dark: ColorTriple {
            primary: "oklch(0.8 0.15 240)",
            accent: "oklch(0.3 0.1 240)",
            secondary: "oklch(0.3 0.1 240)",
        },
    },
    ColorPreset {
        name: "Green",
        light: ColorTriple {
            primary: "oklch(0.5 0.2 145)",
            accent: "oklch(0.8 0.15 145)",
            secondary: "oklch(0.92 0.05 145)",
        },
        dark: ColorTriple {
            primary: "oklch(0.7 0.15 145)",
            accent: "oklch(0.3 0.1 145)",
            secondary: "oklch(0.3 0.1 145)",
        },
    },
    ColorPreset {
        name: "Orange",
        light: ColorTriple {
            primary: "oklch(0.6 0.24 45)",
            accent: "oklch(0.8 0.15 45)",
            secondary: "oklch(0.92 0.05 45)",
        },
        dark: ColorTriple {
            primary: "oklch(0.7 0.2 45)",
            accent: "oklch(0.3 0.1 45)",
            secondary: "oklch(0.3 0.1 45)",
        },
    },
];

/// Index of the preset that leaves the stylesheet's own colors in place
pub const DEFAULT_PRESET: usize = 0;

/// Look up a preset by index.
pub fn preset(index: usize) -> Result<&'static ColorPreset> {
    PRESETS.get(index).ok_or(TokenError::PresetOutOfRange {
        index,
        len: PRESETS.len(),
    })
}

/// Preview swatches (primary, accent, secondary) for a preset in a mode
pub fn swatches(preset: &ColorPreset, mode: ThemeMode) -> [String; 3] {
    let colors = preset.colors(mode);
    [
        approximate_to_rgb(colors.primary),
        approximate_to_rgb(colors.accent),
        approximate_to_rgb(colors.secondary),
    ]
}

/// Feedback roles whose colors follow the active preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    Success,
    Warning,
    Info,
    Error,
}

impl SemanticRole {
    pub const ALL: [SemanticRole; 4] = [
        SemanticRole::Success,
        SemanticRole::Warning,
        SemanticRole::Info,
        SemanticRole::Error,
    ];

    /// Fixed hue in degrees
    pub fn hue(self) -> u16 {
        match self {
            SemanticRole::Success => 145,
            SemanticRole::Warning => 80,
            SemanticRole::Info => 250,
            SemanticRole::Error => 27,
        }
    }

    pub fn variable(self) -> &'static str {
        match self {
            SemanticRole::Success => "--color-success",
            SemanticRole::Warning => "--color-warning",
            SemanticRole::Info => "--color-info",
            SemanticRole::Error => "--color-error",
        }
    }
}

/// Lightness used when a primary color cannot be parsed
const FALLBACK_LIGHTNESS: f64 = 0.5;
/// Chroma used when a primary color cannot be parsed
const FALLBACK_CHROMA: f64 = 0.2;

/// Derive the four semantic colors from a lightness/chroma pair.
pub fn derive_semantic(lightness: f64, chroma: f64) -> [(SemanticRole, String); 4] {
    SemanticRole::ALL.map(|role| {
        (
            role,
            format!("oklch({} {} {})", lightness, chroma, role.hue()),
        )
    })
}

/// Derive semantic colors from a primary color expression.
pub fn derive_semantic_from_primary(primary: &str) -> [(SemanticRole, String); 4] {
    let (lightness, chroma) = Oklch::parse(primary)
        .map(|color| (color.l, color.c))
        .unwrap_or((FALLBACK_LIGHTNESS, FALLBACK_CHROMA));
    derive_semantic(lightness, chroma)
}

/// How applying a preset treats the semantic colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticPolicy {
    /// Derive for every preset except the default one, which leaves the
    /// semantic colors as they are (possibly still derived from an earlier
    /// preset).
    #[default]
    SkipDefault,
    /// Derive for every preset, including the default one.
    Always,
    /// Derive for every non-default preset; the default preset restores the
    /// semantic colors captured from the style root at startup.
    RestoreBaseline,
}

/// The full set of style root writes for applying a preset.
///
/// `baseline` supplies the startup semantic colors for
/// [`SemanticPolicy::RestoreBaseline`].
pub fn plan_preset(
    index: usize,
    mode: ThemeMode,
    policy: SemanticPolicy,
    baseline: &[(String, String)],
) -> Result<Vec<(String, String)>> {
    let preset = preset(index)?;
    let colors = preset.colors(mode);

    let mut writes: Vec<(String, String)> = colors
        .entries()
        .iter()
        .map(|(variable, value)| (variable.to_string(), value.to_string()))
        .collect();

    let derive = || {
        derive_semantic_from_primary(colors.primary)
            .into_iter()
            .map(|(role, value)| (role.variable().to_string(), value))
    };

    match (index == DEFAULT_PRESET, policy) {
        (false, _) | (true, SemanticPolicy::Always) => writes.extend(derive()),
        (true, SemanticPolicy::RestoreBaseline) => writes.extend(baseline.iter().cloned()),
        (true, SemanticPolicy::SkipDefault) => {}
    }

    Ok(writes)
}
