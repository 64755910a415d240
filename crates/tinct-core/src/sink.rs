// ABOUTME: The style root abstraction tokens are read from and written to
// ABOUTME: In-memory root with stylesheet values plus inline overrides, and a JSON file backed variant

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tinct_logging::{debug, warn};

use crate::error::{Result, TokenError};
use crate::stylesheet::parse_root_block;

/// A surface mapping custom property names to values.
///
/// `get` returns the computed value, `set` writes an override that takes
/// precedence over whatever the stylesheet declares.
pub trait StyleSink {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
struct RootState {
    /// Values declared by the stylesheet
    base: HashMap<String, String>,
    /// Values written at runtime
    inline: BTreeMap<String, String>,
}

/// In-memory style root.
///
/// Clones share the same state, so a caller can keep a handle to a root that
/// has been moved into a [`crate::TokenStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStyleRoot {
    state: Arc<RwLock<RootState>>,
}

impl InMemoryStyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A root whose stylesheet declares the given properties.
    pub fn with_stylesheet<I, K, V>(declarations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let base = declarations
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self {
            state: Arc::new(RwLock::new(RootState {
                base,
                inline: BTreeMap::new(),
            })),
        }
    }

    /// A root seeded from the `:root` declarations of a stylesheet.
    pub fn from_css(css: &str) -> Self {
        Self::with_stylesheet(parse_root_block(css))
    }

    /// Runtime overrides, sorted by property name.
    pub fn inline_properties(&self) -> Vec<(String, String)> {
        self.state
            .read()
            .inline
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Drop one runtime override so the stylesheet value shows through again.
    pub fn remove_inline(&self, name: &str) -> Option<String> {
        self.state.write().inline.remove(name)
    }

    pub fn clear_inline(&self) {
        self.state.write().inline.clear();
    }

    fn replace_inline(&self, inline: BTreeMap<String, String>) {
        self.state.write().inline = inline;
    }

    fn inline_snapshot(&self) -> BTreeMap<String, String> {
        self.state.read().inline.clone()
    }
}

impl StyleSink for InMemoryStyleRoot {
    fn get(&self, name: &str) -> Option<String> {
        let state = self.state.read();
        state
            .inline
            .get(name)
            .or_else(|| state.base.get(name))
            .cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.state
            .write()
            .inline
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// A style root whose runtime overrides are kept in a JSON file.
///
/// Only the overrides are persisted; stylesheet values come from the wrapped
/// root every time the file is opened.
#[derive(Debug, Clone)]
pub struct JsonFileStyleRoot {
    path: PathBuf,
    root: InMemoryStyleRoot,
}

impl JsonFileStyleRoot {
    /// Open `path` on top of `root`, loading any overrides it holds.
    ///
    /// A missing file starts with no overrides. A file that is not a JSON
    /// object of strings is ignored and rewritten on the next `set`.
    pub fn open(path: impl Into<PathBuf>, root: InMemoryStyleRoot) -> Result<Self> {
        let path = path.into();

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(inline) => {
                    debug!(path = %path.display(), count = inline.len(), "Loaded style overrides");
                    root.replace_inline(inline);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Ignoring malformed style root file");
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(TokenError::io(&path, e)),
        }

        Ok(Self { path, root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &InMemoryStyleRoot {
        &self.root
    }

    /// Drop the override for `name` and rewrite the file.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        if self.root.remove_inline(name).is_some() {
            debug!(name, "Removed style override");
            self.save()?;
        }
        Ok(())
    }

    /// Drop every override and rewrite the file.
    pub fn clear(&mut self) -> Result<()> {
        self.root.clear_inline();
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TokenError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(&self.root.inline_snapshot())
            .map_err(|e| TokenError::json(&self.path, e))?;
        std::fs::write(&self.path, content).map_err(|e| TokenError::io(&self.path, e))
    }
}

impl StyleSink for JsonFileStyleRoot {
    fn get(&self, name: &str) -> Option<String> {
        self.root.get(name)
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.root.set(name, value)?;
        self.save()
    }
}
