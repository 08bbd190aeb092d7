//! A complete catalog built for one ordered list of search directories.

use super::dictionary::DictionaryCatalog;
use super::module::ModuleCatalog;
use super::scanner::{self, ExtensionBinding};
use crate::config::SearchDirs;
use crate::error::{CatalogError, Result};
use tracing::info;

/// A module definition or dictionary file dropped while building a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// File path, file name, or `<builtin name>`.
    pub source: String,
    /// Error kind, e.g. `unknown_key`.
    pub kind: &'static str,
    pub reason: String,
}

impl Rejection {
    pub fn new(source: impl Into<String>, err: &CatalogError) -> Self {
        Self {
            source: source.into(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}

/// Modules and dictionaries found under one [`SearchDirs`] key.
///
/// Either every list is filled or the snapshot is empty; a failed build
/// leaves it empty.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    slot: usize,
    source_dirs: SearchDirs,
    modules: ModuleCatalog,
    dict_dirs: Vec<String>,
    extensions: Vec<ExtensionBinding>,
    dictionaries: DictionaryCatalog,
    rejections: Vec<Rejection>,
}

impl CatalogSnapshot {
    pub(crate) fn empty(slot: usize, source_dirs: SearchDirs) -> Self {
        Self {
            slot,
            source_dirs,
            ..Self::default()
        }
    }

    /// Scan the filesystem and fill every list. On error the snapshot is
    /// reset to empty before the error is returned.
    pub(crate) fn fill(&mut self) -> Result<()> {
        self.clear();
        match self.try_fill() {
            Ok(()) => {
                info!(
                    slot = self.slot,
                    modules = self.modules.len(),
                    dictionaries = self.dictionaries.len(),
                    rejected = self.rejections.len(),
                    "built dictionary catalog"
                );
                Ok(())
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    fn try_fill(&mut self) -> Result<()> {
        let dirs = self.source_dirs.as_slice();
        self.modules = scanner::scan_modules(dirs, &mut self.rejections)?;
        let (dict_dirs, extensions) = scanner::derive_search(dirs, &self.modules);
        self.dictionaries = scanner::scan_dictionaries(
            &dict_dirs,
            &extensions,
            &self.modules,
            &mut self.rejections,
        );
        self.dict_dirs = dict_dirs;
        self.extensions = extensions;
        Ok(())
    }

    /// Drop everything but the key.
    pub fn clear(&mut self) {
        self.modules.clear();
        self.dict_dirs.clear();
        self.extensions.clear();
        self.dictionaries.clear();
        self.rejections.clear();
    }

    /// A snapshot holds data once its module catalog is non-empty; the
    /// built-in module guarantees that for every successful build.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Position of this snapshot in its cache.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn source_dirs(&self) -> &SearchDirs {
        &self.source_dirs
    }

    pub fn modules(&self) -> &ModuleCatalog {
        &self.modules
    }

    /// Configured directories followed by every module's extra directories.
    pub fn dict_dirs(&self) -> &[String] {
        &self.dict_dirs
    }

    pub fn extensions(&self) -> &[ExtensionBinding] {
        &self.extensions
    }

    pub fn dictionaries(&self) -> &DictionaryCatalog {
        &self.dictionaries
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }
}
