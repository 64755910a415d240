// ABOUTME: Per-kind checks for values written to the style root
// ABOUTME: Rejects anything that could break out of a declaration or is not a plausible CSS value

use once_cell::sync::Lazy;
use regex::Regex;
use tinct_types::TokenKind;

use crate::error::{Result, TokenError};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid hex pattern")
});

static COLOR_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(oklch|oklab|rgb|rgba|hsl|hsla|lab|lch|color|color-mix|var)\(.*\)$")
        .expect("valid color function pattern")
});

static COLOR_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid keyword pattern"));

static LENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?([0-9]+\.?[0-9]*|\.[0-9]+)(px|rem|em|%|vw|vh)$").expect("valid length pattern")
});

static LENGTH_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(calc|var|min|max|clamp)\(.*\)$").expect("valid length function pattern")
});

/// Check `value` is acceptable for a token of `kind`.
///
/// Returns the trimmed value to write.
pub fn validate_value(variable: &str, kind: TokenKind, value: &str) -> Result<String> {
    let trimmed = value.trim();
    let reject = || TokenError::invalid_value(variable, kind, value);

    if trimmed.is_empty() || trimmed.contains([';', '{', '}']) || !balanced(trimmed) {
        return Err(reject());
    }

    let ok = match kind {
        TokenKind::Color => {
            HEX_COLOR.is_match(trimmed)
                || COLOR_FUNCTION.is_match(trimmed)
                || COLOR_KEYWORD.is_match(trimmed)
        }
        TokenKind::Spacing | TokenKind::Radius => is_length(trimmed),
        TokenKind::Shadow => true,
    };

    if ok { Ok(trimmed.to_string()) } else { Err(reject()) }
}

fn is_length(value: &str) -> bool {
    value == "0" || LENGTH.is_match(value) || LENGTH_FUNCTION.is_match(value)
}

fn balanced(value: &str) -> bool {
    let mut depth: i32 = 0;
    for ch in value.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
