//! Validation utilities for manifest names and spans

use miette::SourceSpan;

/// Validate that a name is a simple file stem
/// Returns None if valid, Some(reason) if invalid
///
/// Unit and library names become path components verbatim, so anything
/// resembling a path separator or a hidden-file prefix is rejected.
pub(crate) fn validate_stem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        Some(_) => return Some("name must start with a letter, digit, or underscore"),
        None => return Some("name cannot be empty"),
    }

    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.') {
            return Some("name must contain only letters, digits, underscores, dashes, and dots");
        }
    }

    None
}

/// Check if a name is a conventional uppercase C macro identifier
pub(crate) fn is_macro_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Find the span of the nth quoted occurrence of a value in the TOML source
/// Tries basic strings first, then literal strings
pub(crate) fn find_quoted_span(src: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let needle = format!("{quote}{value}{quote}");
        let mut from = 0;
        let mut seen = 0;
        while let Some(pos) = src[from..].find(&needle) {
            let start = from + pos;
            if seen == nth {
                // +1 to skip the opening quote
                return Some(SourceSpan::from((start + 1, value.len())));
            }
            seen += 1;
            from = start + needle.len();
        }
    }

    None
}

/// Find the span of a top-level key in the TOML source
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let patterns = [format!("{key} ="), format!("{key}=")];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos, key.len())));
        }
    }

    None
}
