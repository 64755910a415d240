// ABOUTME: The recognized token catalog: which custom properties are tokens and how they are grouped
// ABOUTME: Order here is the order tokens are listed and exported in

use tinct_types::TokenKind;

/// A recognized token, before its value is read from the style root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec {
    /// Property name without the leading dashes
    pub name: &'static str,
    pub kind: TokenKind,
    pub category: &'static str,
}

impl TokenSpec {
    pub fn variable(&self) -> String {
        format!("--{}", self.name)
    }

    /// Title-cased label, dropping the `Color ` prefix of semantic tokens
    pub fn display_name(&self) -> String {
        let label = title_case(self.name);
        match label.strip_prefix("Color ") {
            Some(rest) if self.category == SEMANTIC_COLORS => rest.to_string(),
            _ => label,
        }
    }
}

pub const THEME_COLORS: &str = "Theme Colors";
pub const SEMANTIC_COLORS: &str = "Semantic Colors";
pub const RADIUS: &str = "Radius";
pub const SPACING: &str = "Spacing";

const THEME_COLOR_NAMES: [&str; 17] = [
    "background",
    "foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "accent",
    "accent-foreground",
    "muted",
    "muted-foreground",
    "card",
    "card-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
];

const SEMANTIC_COLOR_NAMES: [&str; 8] = [
    "color-success",
    "color-success-foreground",
    "color-warning",
    "color-warning-foreground",
    "color-info",
    "color-info-foreground",
    "color-error",
    "color-error-foreground",
];

const RADIUS_NAMES: [&str; 4] = ["radius-sm", "radius-md", "radius-lg", "radius-xl"];

const SPACING_NAMES: [&str; 10] = [
    "spacing-1",
    "spacing-2",
    "spacing-3",
    "spacing-4",
    "spacing-5",
    "spacing-6",
    "spacing-8",
    "spacing-10",
    "spacing-12",
    "spacing-16",
];

/// Every recognized token in listing order
pub fn catalog() -> Vec<TokenSpec> {
    let groups: [(&[&'static str], TokenKind, &'static str); 4] = [
        (&THEME_COLOR_NAMES, TokenKind::Color, THEME_COLORS),
        (&SEMANTIC_COLOR_NAMES, TokenKind::Color, SEMANTIC_COLORS),
        (&RADIUS_NAMES, TokenKind::Radius, RADIUS),
        (&SPACING_NAMES, TokenKind::Spacing, SPACING),
    ];

    groups
        .into_iter()
        .flat_map(|(names, kind, category)| {
            names.iter().map(move |&name| TokenSpec {
                name,
                kind,
                category,
            })
        })
        .collect()
}

/// "primary-foreground" -> "Primary Foreground"
fn title_case(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
