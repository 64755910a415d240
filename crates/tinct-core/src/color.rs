// ABOUTME: OKLCH expression parsing and the two one-directional preview conversions
// ABOUTME: Both conversions are coarse heuristics for editing UIs, not color-accurate transforms

//! Color approximation for live editing previews.
//!
//! [`approximate_to_rgb`] and [`approximate_from_hex`] are independent
//! best-effort functions. Neither is the inverse of the other: feeding the
//! output of one into the other is not expected to reproduce the input.
//! Never use them where color fidelity matters.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Permissive `oklch(L C H` prefix; numbers are unsigned decimals
static OKLCH_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"oklch\(([0-9.]+) ([0-9.]+) ([0-9.]+)").expect("valid oklch prefix pattern")
});

/// Full `oklch(L C H)` expression
static OKLCH_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"oklch\(([0-9.]+) ([0-9.]+) ([0-9.]+)\)").expect("valid oklch pattern")
});

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)").expect("valid number pattern")
});

/// Fallback for anything that cannot be parsed
pub const FALLBACK_HEX: &str = "#000000";

/// Chroma below this renders as a neutral gray
pub const ACHROMATIC_THRESHOLD: f64 = 0.01;

/// Fixed preview colors for symbolic role references, checked in order
const ROLE_FALLBACKS: [(&str, &str); 10] = [
    ("--primary", "#000000"),
    ("--secondary", "#f5f5f5"),
    ("--accent", "#f5f5f5"),
    ("--muted", "#f5f5f5"),
    ("--background", "#ffffff"),
    ("--foreground", "#000000"),
    ("--success", "#4caf50"),
    ("--warning", "#ff9800"),
    ("--info", "#2196f3"),
    ("--error", "#f44336"),
];

/// A lightness/chroma/hue triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness, nominally 0..=1
    pub l: f64,
    /// Chroma, nominally 0..=0.4
    pub c: f64,
    /// Hue angle in degrees
    pub h: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Parse the first `oklch(L C H)` expression found in `input`.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = OKLCH_EXPR.captures(input)?;
        // Each component is read up to its first invalid character: `1.2.3` is 1.2
        Some(Self {
            l: leading_number(&caps[1])?,
            c: leading_number(&caps[2])?,
            h: leading_number(&caps[3])?,
        })
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.l, self.c, self.h)
    }
}

/// One of the three OKLCH channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Lightness,
    Chroma,
    Hue,
}

impl Channel {
    /// Editable range for the channel
    pub fn range(self) -> (f64, f64) {
        match self {
            Channel::Lightness => (0.0, 1.0),
            Channel::Chroma => (0.0, 0.3),
            Channel::Hue => (0.0, 360.0),
        }
    }
}

/// Replace one channel of the leading `oklch(L C H` in `expr`.
///
/// The new channel value is clamped to [`Channel::range`] and written with
/// three decimals; the other channels and any trailing text (alpha, closing
/// paren) are kept verbatim. Returns `None` when `expr` has no oklch prefix.
pub fn replace_channel(expr: &str, channel: Channel, value: f64) -> Option<String> {
    let caps = OKLCH_PREFIX.captures(expr)?;
    let whole = caps.get(0)?;
    let (min, max) = channel.range();
    let formatted = format!("{:.3}", value.clamp(min, max));

    let (l, c, h) = (&caps[1], &caps[2], &caps[3]);
    let prefix = match channel {
        Channel::Lightness => format!("oklch({formatted} {c} {h}"),
        Channel::Chroma => format!("oklch({l} {formatted} {h}"),
        Channel::Hue => format!("oklch({l} {c} {formatted}"),
    };

    Some(format!(
        "{}{}{}",
        &expr[..whole.start()],
        prefix,
        &expr[whole.end()..]
    ))
}

/// Format 0..=255 channel values as `#rrggbb`, rounding and clamping each.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |v: f64| -> u8 {
        if v.is_nan() {
            0
        } else {
            v.round().clamp(0.0, 255.0) as u8
        }
    };
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Parse `#rrggbb` (case-insensitive) into channel bytes.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Parse the leading decimal number of a CSS value, like `0.625` in `0.625rem`.
pub fn leading_number(value: &str) -> Option<f64> {
    let m = LEADING_NUMBER.find(value)?;
    m.as_str().trim().parse().ok()
}

/// Approximate an OKLCH expression as a `#rrggbb` preview color.
///
/// Total: any input yields a 7-character hex string.
///
/// 1. Symbolic role references (`var(--primary)`, `--background`, ...) map to
///    a fixed color per role.
/// 2. Unparseable input maps to [`FALLBACK_HEX`].
/// 3. Chroma under [`ACHROMATIC_THRESHOLD`] maps to a gray of `L * 255`.
/// 4. Otherwise the hue picks one of six 60° sectors and a fixed linear blend
///    of brightness (`L * 255`) and saturation (`min(2C, 1)`).
pub fn approximate_to_rgb(expr: &str) -> String {
    if let Some((_, hex)) = ROLE_FALLBACKS.iter().find(|(role, _)| expr.contains(role)) {
        return (*hex).to_string();
    }

    let Some(color) = Oklch::parse(expr) else {
        return FALLBACK_HEX.to_string();
    };

    if color.c < ACHROMATIC_THRESHOLD {
        let value = color.l * 255.0;
        return rgb_to_hex(value, value, value);
    }

    let sector = ((color.h / 60.0).floor() as i64).rem_euclid(6);
    let saturation = (color.c * 2.0).min(1.0);
    let b = color.l * 255.0;
    let full = b * (1.0 - saturation);
    let half = b * (1.0 - saturation * 0.5);

    match sector {
        0 => rgb_to_hex(b, full, full),
        1 => rgb_to_hex(full, b, full),
        2 => rgb_to_hex(full, b, half),
        3 => rgb_to_hex(full, half, b),
        4 => rgb_to_hex(half, full, b),
        _ => rgb_to_hex(b, full, half),
    }
}

/// Re-derive an approximate OKLCH expression from a color picker value.
///
/// The formula depends on which role `variable` names. Lossy by
/// construction: most roles ignore the picked color entirely and the hue
/// based ones read a single hex byte as degrees. Returns `None` when `hex`
/// is not `#rrggbb`.
pub fn approximate_from_hex(variable: &str, hex: &str) -> Option<String> {
    let (r, g, b) = parse_hex(hex)?;
    let average = (f64::from(r) + f64::from(g) + f64::from(b)) / 255.0 / 3.0;

    let expr = if variable.contains("primary") {
        format!("oklch(0.5 0.2 {r})")
    } else if variable.contains("secondary") || variable.contains("accent") {
        format!("oklch(0.9 0.05 {g})")
    } else if variable.contains("background") {
        format!("oklch({average:.3} 0 0)")
    } else if variable.contains("foreground") {
        format!("oklch({:.3} 0 0)", 1.0 - average)
    } else if variable.contains("success") {
        "oklch(0.5 0.2 145)".to_string()
    } else if variable.contains("warning") {
        "oklch(0.6 0.2 80)".to_string()
    } else if variable.contains("info") {
        "oklch(0.5 0.15 250)".to_string()
    } else if variable.contains("error") || variable.contains("destructive") {
        "oklch(0.6 0.2 27)".to_string()
    } else {
        format!("oklch(0.5 0.1 {r})")
    };

    Some(expr)
}
