//! Per-key string transforms between camelCase and snake_case
//!
//! These operate on a single key string; they never inspect the value a key
//! maps to. Both scan the key once and copy anything outside their rewrite
//! rule verbatim, so unexpected characters fall through unchanged rather
//! than erroring.

/// Rewrite a camelCase key to snake_case.
///
/// Inserts an underscore before every ASCII uppercase letter and lowercases
/// it. Runs of consecutive uppercase letters split one letter per underscore
/// (`userID` becomes `user_i_d`); there is no acronym handling.
pub fn snake_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rewrite a snake_case key to camelCase.
///
/// Deletes an underscore only when an ASCII lowercase letter follows,
/// uppercasing that letter. A trailing underscore, or an underscore followed
/// by anything other than a lowercase letter, is copied verbatim.
pub fn camel_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '_' {
            match chars.peek() {
                Some(next) if next.is_ascii_lowercase() => {
                    if let Some(next) = chars.next() {
                        out.push(next.to_ascii_uppercase());
                    }
                }
                _ => out.push('_'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
