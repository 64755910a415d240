// ABOUTME: Export of tokens as a `:root { ... }` block and the reverse parse
// ABOUTME: Parsing is used to seed a style root from a stylesheet on disk

use once_cell::sync::Lazy;
use regex::Regex;
use tinct_types::ThemeToken;

static ROOT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":root\s*\{([^}]*)\}").expect("valid root block pattern"));

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(--[A-Za-z0-9_-]+)\s*:\s*([^;{}]+);").expect("valid declaration pattern"));

/// Render tokens as a `:root` block, one declaration per token in order.
pub fn export_root_block(tokens: &[ThemeToken]) -> String {
    let mut css = String::from(":root {\n");
    for token in tokens {
        css.push_str("  ");
        css.push_str(&token.variable);
        css.push_str(": ");
        css.push_str(&token.value);
        css.push_str(";\n");
    }
    css.push('}');
    css
}

/// Custom property declarations from every `:root` block in `css`.
///
/// Later declarations of the same property win, as they would in a browser.
/// Declarations outside `:root` blocks are ignored.
pub fn parse_root_block(css: &str) -> Vec<(String, String)> {
    let mut declarations: Vec<(String, String)> = Vec::new();

    for block in ROOT_BLOCK.captures_iter(css) {
        for decl in DECLARATION.captures_iter(&block[1]) {
            let name = decl[1].to_string();
            let value = decl[2].trim().to_string();
            match declarations.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => declarations.push((name, value)),
            }
        }
    }

    declarations
}
