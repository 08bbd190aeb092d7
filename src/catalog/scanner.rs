//! Directory scanning for module definitions and dictionary files.
//!
//! Directories that are missing or unreadable are skipped; search paths are
//! optional. Files inside one directory are visited in name order.

use super::dictionary::{DictionaryCatalog, DictionaryEntry};
use super::filename;
use super::module::{BUILTIN_MODULES, MODULE_SUFFIX, ModuleCatalog, ModuleDescriptor};
use super::snapshot::Rejection;
use crate::error::{CatalogError, Result};
use crate::keyvalue::{FILE_DELIMITER, INLINE_DELIMITER};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Extension of dictionaries that are their own word list.
pub const DIRECT_EXTENSION: &str = ".awli";

/// A dictionary filename suffix and the module that owns it.
#[derive(Debug, Clone)]
pub struct ExtensionBinding {
    pub suffix: String,
    /// `None` for the direct `.awli` binding.
    pub module: Option<Arc<ModuleDescriptor>>,
}

impl ExtensionBinding {
    /// Strip the suffix, requiring a non-empty remainder.
    fn strip<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.suffix.as_str())
            .filter(|base| !base.is_empty())
    }
}

/// Build the module catalog from the built-in modules and every `*.asmi`
/// file found in `dirs`. A directory listed twice is read once.
pub(crate) fn scan_modules(dirs: &[String], rejections: &mut Vec<Rejection>) -> Result<ModuleCatalog> {
    let mut catalog = ModuleCatalog::default();

    for builtin in BUILTIN_MODULES {
        let source = format!("<builtin {}>", builtin.name);
        let parsed = ModuleDescriptor::parse(builtin.name, builtin.definition, INLINE_DELIMITER);
        register_module(&mut catalog, parsed, source, rejections);
    }

    let mut seen: Vec<&String> = Vec::new();
    for dir in dirs {
        if seen.contains(&dir) {
            continue;
        }
        seen.push(dir);
        let Some(files) = list_dir(Path::new(dir)) else {
            continue;
        };
        for (file_name, path) in files {
            let Some(module_name) = module_name_of(&file_name) else {
                continue;
            };
            if module_name.is_empty() || !path.is_file() {
                debug!(path = %path.display(), "skipping module candidate");
                continue;
            }
            let text = fs::read_to_string(&path).map_err(|err| CatalogError::io(&path, err))?;
            let parsed = ModuleDescriptor::parse(module_name, &text, FILE_DELIMITER);
            register_module(&mut catalog, parsed, path.display().to_string(), rejections);
        }
    }

    Ok(catalog)
}

fn register_module(
    catalog: &mut ModuleCatalog,
    parsed: Result<ModuleDescriptor>,
    source: String,
    rejections: &mut Vec<Rejection>,
) {
    match parsed {
        Ok(module) => {
            debug!(module = %module.name, order_num = module.order_num, "registered module");
            catalog.insert(module);
        }
        Err(err) => {
            warn!(%source, error = %err, "rejecting module definition");
            rejections.push(Rejection::new(source, &err));
        }
    }
}

/// `name.asmi` -> `name`; anything whose last extension is not `.asmi` -> `None`.
fn module_name_of(file_name: &str) -> Option<&str> {
    let dot = file_name.rfind('.')?;
    (&file_name[dot..] == MODULE_SUFFIX).then(|| &file_name[..dot])
}

/// Dictionary search directories and extension bindings derived from the
/// configured directories and the module catalog.
pub(crate) fn derive_search(
    dirs: &[String],
    modules: &ModuleCatalog,
) -> (Vec<String>, Vec<ExtensionBinding>) {
    let mut dict_dirs: Vec<String> = Vec::new();
    let mut push_dir = |dir: &String| {
        if !dict_dirs.contains(dir) {
            dict_dirs.push(dir.clone());
        }
    };
    dirs.iter().for_each(&mut push_dir);

    let mut extensions = vec![ExtensionBinding {
        suffix: DIRECT_EXTENSION.to_string(),
        module: None,
    }];

    for module in modules.iter() {
        module.dict_dirs.iter().for_each(&mut push_dir);
        for ext in &module.dict_exts {
            extensions.push(ExtensionBinding {
                suffix: ext.clone(),
                module: Some(Arc::clone(module)),
            });
        }
    }

    (dict_dirs, extensions)
}

/// Build the dictionary catalog from files in `dict_dirs` that end in one of
/// the bound extensions.
pub(crate) fn scan_dictionaries(
    dict_dirs: &[String],
    extensions: &[ExtensionBinding],
    modules: &ModuleCatalog,
    rejections: &mut Vec<Rejection>,
) -> DictionaryCatalog {
    let mut catalog = DictionaryCatalog::default();

    for dir in dict_dirs {
        let Some(files) = list_dir(Path::new(dir)) else {
            continue;
        };
        for (file_name, path) in files {
            let Some((binding, base)) = extensions
                .iter()
                .find_map(|binding| binding.strip(&file_name).map(|base| (binding, base)))
            else {
                continue;
            };
            if path.is_dir() {
                continue;
            }
            match decode_entry(base, binding, modules, path) {
                Ok(Some(entry)) => catalog.insert(entry),
                Ok(None) => debug!(file = %file_name, "not a dictionary name"),
                Err(err) => {
                    warn!(file = %file_name, error = %err, "skipping dictionary");
                    rejections.push(Rejection::new(file_name.clone(), &err));
                }
            }
        }
    }

    catalog
}

/// Decode one candidate file into a catalog entry.
///
/// `Ok(None)` means the name does not follow the dictionary grammar.
pub fn decode_entry(
    base: &str,
    binding: &ExtensionBinding,
    modules: &ModuleCatalog,
    path: PathBuf,
) -> Result<Option<DictionaryEntry>> {
    let known = binding.module.as_ref().map(|m| m.name.as_str());
    let Some(mut decoded) = filename::decode(base, known) else {
        return Ok(None);
    };

    let module = match (&binding.module, decoded.module_name.take()) {
        (Some(module), _) => Arc::clone(module),
        (None, name) => {
            let name = name.unwrap_or_default();
            match modules.find(&name) {
                Some(module) => Arc::clone(module),
                None => return Err(CatalogError::UnknownModule { name, file: path }),
            }
        }
    };

    let direct = binding.module.is_none();
    Ok(Some(DictionaryEntry::new(decoded, module, direct, path)))
}

/// File names (UTF-8 only) and paths in `dir`, sorted by name. `None` when the
/// directory cannot be opened.
fn list_dir(dir: &Path) -> Option<Vec<(String, PathBuf)>> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "skipping search directory");
            return None;
        }
    };
    let mut files: Vec<(String, PathBuf)> = read
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            Some((name, entry.path()))
        })
        .collect();
    files.sort();
    Some(files)
}
