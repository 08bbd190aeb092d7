//! Search-path configuration.
//!
//! Two ordered directory lists, `data-dir` and `dict-dir`, decide where module
//! definitions and dictionaries are looked up. Their concatenation is the key
//! the catalog cache is indexed by. Values come from (lowest to highest
//! precedence) built-in defaults, defaults baked in at build time, a JSON
//! config file, `SPELLCAT_DATA_DIR` / `SPELLCAT_DICT_DIR`, and whatever the
//! caller sets explicitly.

use crate::split_list;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const ENV_DATA_DIR: &str = "SPELLCAT_DATA_DIR";
pub const ENV_DICT_DIR: &str = "SPELLCAT_DICT_DIR";

const FALLBACK_DATA_DIR: &str = "/usr/share/aspell";
const FALLBACK_DICT_DIR: &str = "/usr/lib/aspell";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: Vec<String>,
    #[serde(default = "default_dict_dir")]
    pub dict_dir: Vec<String>,
}

fn default_data_dir() -> Vec<String> {
    vec![option_env!("SPELLCAT_DEFAULT_DATA_DIR")
        .unwrap_or(FALLBACK_DATA_DIR)
        .to_string()]
}

fn default_dict_dir() -> Vec<String> {
    vec![option_env!("SPELLCAT_DEFAULT_DICT_DIR")
        .unwrap_or(FALLBACK_DICT_DIR)
        .to_string()]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            dict_dir: default_dict_dir(),
        }
    }
}

impl CatalogConfig {
    pub fn new(data_dir: Vec<String>, dict_dir: Vec<String>) -> Self {
        Self { data_dir, dict_dir }
    }

    /// Parse a JSON config file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading catalog config {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("parsing catalog config {}", path.display()))
    }

    /// Defaults overridden by `SPELLCAT_DATA_DIR` / `SPELLCAT_DICT_DIR`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|name| env::var(name).ok());
        config
    }

    /// Replace either list with the comma/space separated value `lookup`
    /// returns for its variable name, when that value is non-empty.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dirs) = lookup(ENV_DATA_DIR).map(|raw| split_list(&raw)) {
            if !dirs.is_empty() {
                self.data_dir = dirs;
            }
        }
        if let Some(dirs) = lookup(ENV_DICT_DIR).map(|raw| split_list(&raw)) {
            if !dirs.is_empty() {
                self.dict_dir = dirs;
            }
        }
    }

    /// The cache key: `data-dir` followed by `dict-dir`, in order.
    pub fn search_dirs(&self) -> SearchDirs {
        SearchDirs(self.data_dir.iter().chain(&self.dict_dir).cloned().collect())
    }
}

/// Ordered directory list identifying one catalog snapshot.
///
/// Two keys are equal only with the same length, order, and strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchDirs(Vec<String>);

impl SearchDirs {
    pub fn new(dirs: Vec<String>) -> Self {
        Self(dirs)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for SearchDirs {
    fn from(dirs: Vec<String>) -> Self {
        Self(dirs)
    }
}
