//! Dictionary filename grammar.
//!
//! A stripped base name is split on `-` into segments:
//!
//! ```text
//! <code>[-<jargon>][-<module>][-<NN>]      module already known via its extension
//! <code>[-<jargon>][-<NN>]-<module>        known module, size tag ahead of the module
//! <code>[-<jargon>]-<module>[-<NN>]        direct (.awli) file, module named in the file
//! <code>[-<jargon>][-<NN>]-<module>        direct file, size tag ahead of the module
//! ```
//!
//! With a known module, the module segment is only recognized after at least
//! one other segment, so `en-default` under `default` has jargon `default`.
//!
//! `<code>` is a two letter language code or `xx_YY`. Names whose code does not
//! fit are not dictionaries and decode to `None`.

/// Size used when the name carries no `-NN` tag.
pub const DEFAULT_SIZE: &str = "60";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    /// Normalized base name without the module segment.
    pub name: String,
    pub code: String,
    pub jargon: String,
    pub size_str: String,
    pub size: u32,
    /// Module segment read from the name; `None` when the caller already knew
    /// the module. Empty when a direct name has no module segment at all.
    pub module_name: Option<String>,
}

/// Decode `base` (the filename with its extension removed).
///
/// `known_module` is the name of the module owning the matched extension, or
/// `None` for direct dictionaries.
pub fn decode(base: &str, known_module: Option<&str>) -> Option<DecodedName> {
    let mut segments = base.split('-');
    let raw_code = segments.next().unwrap_or_default();
    let code = normalize_code(raw_code)?;
    let mut tail: Vec<&str> = segments.collect();
    let mut size_str: Option<&str> = None;

    let (name, module_name) = match known_module {
        Some(module) => {
            if tail.last().is_some_and(|s| is_size_tag(s)) {
                size_str = tail.pop();
            }
            // A lone segment is jargon even when it spells the module name.
            if tail.len() >= 2 && tail.last() == Some(&module) {
                tail.pop();
                if size_str.is_none() && tail.last().is_some_and(|s| is_size_tag(s)) {
                    size_str = tail.pop();
                }
            }
            let name = format!("{code}{}", &base[raw_code.len()..]);
            (name, None)
        }
        None => {
            let module = if tail.len() >= 2 && tail.last().is_some_and(|s| is_size_tag(s)) {
                size_str = tail.pop();
                tail.pop()
            } else {
                let module = tail.pop();
                if module.is_some() && tail.last().is_some_and(|s| is_size_tag(s)) {
                    size_str = tail.pop();
                }
                module
            };
            let mut parts = vec![code.as_str()];
            parts.extend(tail.iter().copied());
            parts.extend(size_str);
            (parts.join("-"), Some(module.unwrap_or_default().to_string()))
        }
    };

    let size_str = size_str.unwrap_or(DEFAULT_SIZE).to_string();
    let size = size_str.parse().ok()?;

    Some(DecodedName {
        name,
        code,
        jargon: tail.join("-"),
        size_str,
        size,
        module_name,
    })
}

/// Validate and normalize a language code: `en`, `EN` -> `en`; `en_us` -> `en_US`.
pub fn normalize_code(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_alphabetic() || !bytes[1].is_ascii_alphabetic() {
        return None;
    }
    let lang = raw[..2].to_ascii_lowercase();
    match bytes.len() {
        2 => Some(lang),
        5 if bytes[2] == b'_' && bytes[3].is_ascii_alphabetic() && bytes[4].is_ascii_alphabetic() => {
            Some(format!("{lang}_{}", raw[3..].to_ascii_uppercase()))
        }
        _ => None,
    }
}

fn is_size_tag(segment: &str) -> bool {
    segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_digit())
}
