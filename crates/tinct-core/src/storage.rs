// ABOUTME: Durable key/value storage for theme preferences
// ABOUTME: Shared in-memory store for tests and embedding, JSON file store for the CLI

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tinct_logging::{debug, warn};
use tinct_types::StorageKey;

use crate::error::{Result, TokenError};

/// Durable storage for the values that outlive a session.
pub trait PreferenceStore {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&mut self, key: StorageKey, value: &str) -> Result<()>;
}

/// In-memory preferences. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferences pre-populated with `entries`.
    pub fn with_entries<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StorageKey, V)>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.read().get(&key).cloned()
    }

    fn set(&mut self, key: StorageKey, value: &str) -> Result<()> {
        self.values.write().insert(key, value.to_string());
        Ok(())
    }
}

/// Preferences kept as a JSON object in a file, written through on every set.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open `path`. A missing or malformed file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring malformed preferences file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(TokenError::io(&path, e)),
        };

        debug!(path = %path.display(), count = values.len(), "Opened preferences");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TokenError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| TokenError::json(&self.path, e))?;
        std::fs::write(&self.path, content).map_err(|e| TokenError::io(&self.path, e))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: StorageKey, value: &str) -> Result<()> {
        self.values
            .insert(key.as_str().to_string(), value.to_string());
        self.save()
    }
}
