//! Module and dictionary catalogs.
//!
//! Module definitions (`*.asmi` plus the built-in `default` module) are read
//! from the configured search directories and kept sorted by `order-num`.
//! Dictionary files are then found by extension in those directories and any
//! directories the modules add, decoded from their filenames, and kept sorted
//! by code, jargon, size, and module name. A [`CatalogSnapshot`] holds both
//! for one search-path key.

pub mod dictionary;
pub mod filename;
pub mod module;
pub mod scanner;
pub mod snapshot;

pub use dictionary::{DictionaryCatalog, DictionaryEntry};
pub use filename::{DEFAULT_SIZE, DecodedName, decode, normalize_code};
pub use module::{BUILTIN_MODULES, MAX_EXTENSION_LEN, MODULE_SUFFIX, ModuleCatalog, ModuleDescriptor};
pub use scanner::{DIRECT_EXTENSION, ExtensionBinding, decode_entry};
pub use snapshot::{CatalogSnapshot, Rejection};
