//! Dictionary entries and the sorted dictionary catalog.

use super::filename::DecodedName;
use super::module::ModuleDescriptor;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub name: String,
    /// `xx` or `xx_YY`.
    pub code: String,
    pub jargon: String,
    pub size_str: String,
    pub size: u32,
    pub module: Arc<ModuleDescriptor>,
    /// `true` when `info_file` is itself the word list.
    pub direct: bool,
    pub info_file: PathBuf,
}

impl DictionaryEntry {
    pub fn new(
        decoded: DecodedName,
        module: Arc<ModuleDescriptor>,
        direct: bool,
        info_file: PathBuf,
    ) -> Self {
        Self {
            name: decoded.name,
            code: decoded.code,
            jargon: decoded.jargon,
            size_str: decoded.size_str,
            size: decoded.size,
            module,
            direct,
            info_file,
        }
    }

    /// Language part of the code (`en` for `en_US`).
    pub fn language(&self) -> &str {
        &self.code[..2]
    }

    /// Catalog order: code, jargon, numeric size, module name.
    pub fn catalog_cmp(&self, other: &Self) -> Ordering {
        self.code
            .cmp(&other.code)
            .then_with(|| self.jargon.cmp(&other.jargon))
            .then_with(|| self.size.cmp(&other.size))
            .then_with(|| self.module.name.cmp(&other.module.name))
    }
}

/// Dictionaries sorted by [`DictionaryEntry::catalog_cmp`].
///
/// Entries with an identical key end up in reverse arrival order.
#[derive(Debug, Default, Clone)]
pub struct DictionaryCatalog {
    entries: Vec<DictionaryEntry>,
}

impl DictionaryCatalog {
    pub fn insert(&mut self, entry: DictionaryEntry) {
        let pos = self
            .entries
            .partition_point(|existing| existing.catalog_cmp(&entry) == Ordering::Less);
        self.entries.insert(pos, entry);
    }

    /// First entry with the given name, in catalog order.
    pub fn find(&self, name: &str) -> Option<&DictionaryEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Entries whose full code or language part equals `code`.
    pub fn for_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a DictionaryEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.code == code || entry.language() == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
