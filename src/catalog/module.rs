//! Module definitions and the order-num sorted module catalog.

use crate::error::{CatalogError, Result};
use crate::keyvalue::{self, itemize};
use std::sync::Arc;

/// File suffix for module definition files.
pub const MODULE_SUFFIX: &str = ".asmi";

/// Longest dictionary extension a module may own.
pub const MAX_EXTENSION_LEN: usize = 15;

const ORDER_NUM_EXPECTED: &str = "a number between 0 and 1";

/// A module compiled into the library rather than read from disk.
pub struct BuiltinModule {
    pub name: &'static str,
    pub definition: &'static str,
}

pub const BUILTIN_MODULES: &[BuiltinModule] = &[BuiltinModule {
    name: "default",
    definition: "order-num 0.50;dict-exts .multi",
}];

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDescriptor {
    pub name: String,
    /// Sort key, strictly inside (0, 1).
    pub order_num: f64,
    pub lib_dir: Option<String>,
    /// Extra directories scanned for dictionaries.
    pub dict_dirs: Vec<String>,
    /// Dictionary filename suffixes owned by this module.
    pub dict_exts: Vec<String>,
}

impl ModuleDescriptor {
    /// Parse a module definition.
    ///
    /// Any unknown key or invalid value rejects the whole definition; nothing
    /// from a rejected definition reaches the catalog.
    pub fn parse(name: &str, text: &str, delimiter: char) -> Result<Self> {
        let mut order_num: Option<f64> = None;
        let mut lib_dir = None;
        let mut dict_dirs = Vec::new();
        let mut dict_exts = Vec::new();

        for (key, value) in keyvalue::pairs(text, delimiter) {
            match key.as_ref() {
                "order-num" => {
                    let parsed = parse_order_num(&value).ok_or_else(|| CatalogError::BadValue {
                        key: key.to_string(),
                        value: value.to_string(),
                        expected: ORDER_NUM_EXPECTED,
                    })?;
                    order_num = Some(parsed);
                }
                "lib-dir" => lib_dir = Some(value.into_owned()),
                "dict-dir" | "dict-dirs" => itemize(&value, &mut dict_dirs),
                "dict-exts" => {
                    itemize(&value, &mut dict_exts);
                    if let Some(long) = dict_exts.iter().find(|ext| ext.len() > MAX_EXTENSION_LEN) {
                        return Err(CatalogError::BadValue {
                            key: key.to_string(),
                            value: long.clone(),
                            expected: "an extension of at most 15 characters",
                        });
                    }
                }
                other => {
                    return Err(CatalogError::UnknownKey {
                        key: other.to_string(),
                    });
                }
            }
        }

        let order_num = order_num.ok_or_else(|| CatalogError::BadValue {
            key: "order-num".to_string(),
            value: String::new(),
            expected: ORDER_NUM_EXPECTED,
        })?;

        Ok(Self {
            name: name.to_string(),
            order_num,
            lib_dir,
            dict_dirs,
            dict_exts,
        })
    }
}

fn parse_order_num(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    (0.0 < value && value < 1.0).then_some(value)
}

/// Modules sorted ascending by `order_num`.
///
/// A module inserted with the same `order_num` as existing ones lands ahead
/// of them.
#[derive(Debug, Default, Clone)]
pub struct ModuleCatalog {
    modules: Vec<Arc<ModuleDescriptor>>,
}

impl ModuleCatalog {
    pub fn insert(&mut self, module: ModuleDescriptor) -> Arc<ModuleDescriptor> {
        let pos = self
            .modules
            .partition_point(|existing| existing.order_num < module.order_num);
        let module = Arc::new(module);
        self.modules.insert(pos, Arc::clone(&module));
        module
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Arc<ModuleDescriptor>> {
        self.modules.iter().find(|module| module.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ModuleDescriptor>> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn clear(&mut self) {
        self.modules.clear();
    }
}
