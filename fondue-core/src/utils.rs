//! Shared utility functions.

/// Convert a name to an uppercase macro identifier (e.g., "my-lib" -> "MY_LIB")
pub fn to_macro_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev = '_';
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if c.is_ascii_uppercase() && prev.is_ascii_lowercase() {
                result.push('_');
            }
            result.push(c.to_ascii_uppercase());
        } else if !result.is_empty() && !result.ends_with('_') {
            result.push('_');
        }
        prev = c;
    }
    result.trim_end_matches('_').to_string()
}
