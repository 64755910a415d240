// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for the tinct token store and CLI

pub mod preset;
pub mod storage;
pub mod theme;
pub mod token;

// Re-export commonly used types
pub use preset::{ColorPreset, ColorTriple};
pub use storage::StorageKey;
pub use theme::{ThemeMode, ThemePreference};
pub use token::{ThemeToken, TokenKind};
