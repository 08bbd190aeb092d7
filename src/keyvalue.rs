//! Reader for the `key value` record format used by module definitions and
//! dictionary info files, plus the list `itemize` helper.
//!
//! A record ends at the delimiter (newline for files, `;` for the built-in
//! definitions). `#` starts a comment that runs to the end of the record. The
//! key is the first whitespace-delimited token and the value is the trimmed
//! remainder, which may be empty.
//!
//! A backslash makes the next character literal, so `\#` and `\ ` keep a `#`
//! or a space inside a key or value. Escapes are removed from the returned
//! key and value; a backslash ending the record is dropped.

use std::borrow::Cow;

/// Record delimiter used by definition and info files on disk.
pub const FILE_DELIMITER: char = '\n';

/// Record delimiter used by the built-in in-memory definitions.
pub const INLINE_DELIMITER: char = ';';

/// Iterator over `(key, value)` records in a block of text.
pub struct Pairs<'a> {
    records: std::str::Split<'a, char>,
}

pub fn pairs(text: &str, delimiter: char) -> Pairs<'_> {
    Pairs {
        records: text.split(delimiter),
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (Cow<'a, str>, Cow<'a, str>);

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.records.by_ref() {
            let record = match find_unescaped(record, |c| c == '#') {
                Some(idx) => &record[..idx],
                None => record,
            };
            let record = trim_record(record);
            if record.is_empty() {
                continue;
            }
            let (key, value) = match find_unescaped(record, char::is_whitespace) {
                Some(idx) => (&record[..idx], record[idx..].trim_start()),
                None => (record, ""),
            };
            return Some((unescape(key), unescape(value)));
        }
        None
    }
}

/// Byte offset of the first character matching `pred` that is not escaped.
fn find_unescaped(text: &str, pred: impl Fn(char) -> bool) -> Option<usize> {
    let mut escaped = false;
    for (idx, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if pred(c) {
            return Some(idx);
        }
    }
    None
}

/// Trim surrounding whitespace, keeping a trailing space that is escaped.
fn trim_record(record: &str) -> &str {
    let record = record.trim_start();
    let end = record.trim_end().len();
    let slashes = record[..end].bytes().rev().take_while(|&b| b == b'\\').count();
    if slashes % 2 == 1 {
        let kept = record[end..].chars().next().map_or(0, char::len_utf8);
        return &record[..end + kept];
    }
    &record[..end]
}

fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.extend(chars.next());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Apply a comma separated item list to `list`.
///
/// `!` clears the list, `-item` removes `item`, and a leading `+` is ignored.
/// Items already present are not added twice.
pub fn itemize(value: &str, list: &mut Vec<String>) {
    for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if item == "!" {
            list.clear();
        } else if let Some(removed) = item.strip_prefix('-') {
            let removed = removed.trim();
            list.retain(|existing| existing != removed);
        } else {
            let added = item.strip_prefix('+').unwrap_or(item).trim();
            if !added.is_empty() && !list.iter().any(|existing| existing == added) {
                list.push(added.to_string());
            }
        }
    }
}
