// ABOUTME: Theme token engine: token store, style root and preference abstractions, color helpers
// ABOUTME: Layer 2 crate depending only on tinct-types and tinct-logging

pub mod catalog;
pub mod color;
pub mod error;
pub mod presets;
pub mod sink;
pub mod storage;
pub mod store;
pub mod stylesheet;
pub mod validate;

#[cfg(test)]
mod store_tests;

pub use color::{Channel, Oklch, approximate_from_hex, approximate_to_rgb};
pub use error::{Result, TokenError};
pub use presets::{
    DEFAULT_PRESET, PRESETS, SemanticPolicy, SemanticRole, derive_semantic, plan_preset, swatches,
};
pub use sink::{InMemoryStyleRoot, JsonFileStyleRoot, StyleSink};
pub use storage::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use store::{
    MAX_RADIUS_PX, MIN_RADIUS_PX, TokenStore, clamp_radius, radius_rem, semantic_baseline,
};
pub use stylesheet::{export_root_block, parse_root_block};

// Re-export the data types callers need alongside the store
pub use tinct_types::{
    ColorPreset, ColorTriple, StorageKey, ThemeMode, ThemePreference, ThemeToken, TokenKind,
};
