#![allow(dead_code)]

use anyhow::{Context, Result};
use spellcat::{CatalogConfig, CatalogSnapshot, SearchDirs};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Temporary search directory tree; removed when dropped.
pub struct DictTree {
    dir: TempDir,
}

impl DictTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("creating temp dictionary tree")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel`, created as a directory.
    pub fn dir(&self, rel: &str) -> Result<PathBuf> {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).with_context(|| format!("creating {}", path.display()))?;
        Ok(path)
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    pub fn path_string(&self, rel: &str) -> String {
        self.root().join(rel).display().to_string()
    }

    pub fn search_dirs(&self, rels: &[&str]) -> SearchDirs {
        SearchDirs::new(rels.iter().map(|rel| self.path_string(rel)).collect())
    }

    pub fn config(&self, data: &[&str], dict: &[&str]) -> CatalogConfig {
        CatalogConfig::new(
            data.iter().map(|rel| self.path_string(rel)).collect(),
            dict.iter().map(|rel| self.path_string(rel)).collect(),
        )
    }
}

pub fn module_names(snapshot: &CatalogSnapshot) -> Vec<String> {
    snapshot.modules().iter().map(|m| m.name.clone()).collect()
}

pub fn dictionary_names(snapshot: &CatalogSnapshot) -> Vec<String> {
    snapshot
        .dictionaries()
        .iter()
        .map(|e| e.name.clone())
        .collect()
}

/// `code|jargon|size|module` for every entry, in catalog order.
pub fn dictionary_keys(snapshot: &CatalogSnapshot) -> Vec<String> {
    snapshot
        .dictionaries()
        .iter()
        .map(|e| format!("{}|{}|{}|{}", e.code, e.jargon, e.size_str, e.module.name))
        .collect()
}
