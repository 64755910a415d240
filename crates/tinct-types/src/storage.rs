// ABOUTME: Durable storage keys shared by the token store and the theme provider
// ABOUTME: Values are plain decimal or keyword strings

/// Keys in the durable key/value store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// `light` | `dark` | `system`, written by the theme provider
    Theme,
    /// Radius in pixels as a decimal string
    Radius,
    /// Zero-based preset index as a decimal string
    ColorPreset,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [StorageKey::Theme, StorageKey::Radius, StorageKey::ColorPreset];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Theme => "app-theme",
            StorageKey::Radius => "app-radius",
            StorageKey::ColorPreset => "app-color-preset",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
