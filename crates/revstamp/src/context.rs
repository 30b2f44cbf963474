//! Build context handed to environment hooks by the site generator.
//!
//! The host creates these objects before hook dispatch, hands mutable
//! references to each hook in turn, feeds the result to the rendering
//! stages, and discards everything when the build ends. Nothing here is
//! persisted.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

/// Template-global mapping consumed by the rendering stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateGlobals {
    globals: BTreeMap<String, Value>,
}

impl TemplateGlobals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a global, replacing any value a previous hook wrote.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.globals.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.globals.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.globals.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }
}

/// Site configuration with its free-form `extra` table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildConfig {
    pub site_name: String,
    pub extra: BTreeMap<String, Value>,
}

impl BuildConfig {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// A resolved content file the generator will render.
///
/// Hooks receive the full collection even when they ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    pub src_path: PathBuf,
}

impl ContentFile {
    pub fn new(src_path: impl Into<PathBuf>) -> Self {
        Self {
            src_path: src_path.into(),
        }
    }
}
