//! Turn a catalog entry into the word list a speller should load.

use crate::catalog::DictionaryEntry;
use crate::error::{CatalogError, Result};
use crate::keyvalue::{self, FILE_DELIMITER};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListRef {
    pub main_word_list: PathBuf,
    pub flags: String,
}

/// Resolve `entry` to its main word list and flags.
///
/// Direct entries name the word list themselves and need no I/O. Indirect
/// entries point at an info file whose first record is
/// `<main word list path> <flags>`.
pub fn resolve(entry: &DictionaryEntry) -> Result<WordListRef> {
    if entry.direct {
        return Ok(WordListRef {
            main_word_list: entry.info_file.clone(),
            flags: String::new(),
        });
    }

    let bad_format = |reason: String| CatalogError::BadFileFormat {
        path: entry.info_file.clone(),
        reason,
    };
    let text = fs::read_to_string(&entry.info_file)
        .map_err(|err| bad_format(format!("cannot be read ({err})")))?;
    let (path, flags) = keyvalue::pairs(&text, FILE_DELIMITER)
        .next()
        .ok_or_else(|| bad_format("no word list record".to_string()))?;

    Ok(WordListRef {
        main_word_list: PathBuf::from(path.into_owned()),
        flags: flags.into_owned(),
    })
}
