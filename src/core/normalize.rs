//! Placeholder normalization for cache keys.
//!
//! Translatable strings carry template variables (`{{count}}`, `{name}`) that
//! must survive translation untouched. Before a string is used as a cache key
//! every placeholder is swapped for a positional token, so the same sentence
//! with different variable names still maps onto stable keys.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Double-brace handlebars first, then single-brace identifiers.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{.*?\}\}|\{[^{}]+\}").unwrap());

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__HB(\d+)__").unwrap());

/// A cache key with its placeholders replaced by `__HB<i>__` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKey {
    pub key: String,
    /// Original placeholder text, indexed by token position.
    pub placeholders: Vec<String>,
}

impl NormalizedKey {
    /// True if at least one placeholder was replaced.
    pub fn is_changed(&self) -> bool {
        !self.placeholders.is_empty()
    }
}

/// Positional token for the placeholder at `index`.
pub fn placeholder_token(index: usize) -> String {
    format!("__HB{}__", index)
}

/// Replace every placeholder in `text` with its positional token.
///
/// Tokens are assigned per occurrence, so `"{{a}} and {{a}}"` becomes
/// `"__HB0__ and __HB1__"`.
///
/// ```
/// use trcache::core::normalize_key;
///
/// assert_eq!(normalize_key("Hi {name}").key, "Hi __HB0__");
/// assert_eq!(normalize_key("{{a}} and {{a}}").key, "__HB0__ and __HB1__");
/// assert_eq!(normalize_key("Plain text").key, "Plain text");
/// ```
pub fn normalize_key(text: &str) -> NormalizedKey {
    let mut key = String::with_capacity(text.len());
    let mut placeholders = Vec::new();
    let mut last_end = 0;

    for m in PLACEHOLDER_REGEX.find_iter(text) {
        key.push_str(&text[last_end..m.start()]);
        key.push_str(&placeholder_token(placeholders.len()));
        placeholders.push(m.as_str().to_string());
        last_end = m.end();
    }
    key.push_str(&text[last_end..]);

    NormalizedKey { key, placeholders }
}

/// Put the original placeholders back in place of their tokens.
///
/// Done in a single pass, so restored text is never rescanned. Tokens with
/// no recorded placeholder are left as they are.
pub fn restore_placeholders(text: &str, placeholders: &[String]) -> String {
    TOKEN_REGEX
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| placeholders.get(index))
                .map_or_else(|| caps[0].to_string(), Clone::clone)
        })
        .into_owned()
}
