//! Error kinds surfaced by catalog building and dictionary resolution.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A definition field failed validation, e.g. `order-num` outside (0, 1).
    #[error("the value \"{value}\" is not valid for the key \"{key}\"; expected {expected}")]
    BadValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// A module definition used a key the parser does not recognize.
    #[error("the key \"{key}\" is unknown")]
    UnknownKey { key: String },

    /// A dictionary filename named a module that is not in the module catalog.
    #[error("the module \"{name}\" referenced by {} is unknown", file.display())]
    UnknownModule { name: String, file: PathBuf },

    /// An info file could not be read or did not hold its one required record.
    #[error("the file \"{}\" is not in the proper format: {reason}", path.display())]
    BadFileFormat { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::BadValue { .. } => "bad_value",
            CatalogError::UnknownKey { .. } => "unknown_key",
            CatalogError::UnknownModule { .. } => "unknown_module",
            CatalogError::BadFileFormat { .. } => "bad_file_format",
            CatalogError::Io { .. } => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
