//! Catalog of spell-checker modules and the dictionaries they expose.
//!
//! Callers hold a [`CatalogCache`], ask it for the snapshot matching their
//! [`CatalogConfig`], iterate its dictionaries, and [`resolve`] the chosen
//! entry to a word list path.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod keyvalue;
pub mod resolve;

pub use cache::{CacheHint, CatalogCache};
pub use catalog::{
    CatalogSnapshot, DictionaryCatalog, DictionaryEntry, ExtensionBinding, ModuleCatalog,
    ModuleDescriptor, Rejection,
};
pub use config::{CatalogConfig, SearchDirs};
pub use error::{CatalogError, Result};
pub use resolve::{WordListRef, resolve};

/// Split a comma and/or whitespace separated list, dropping empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
