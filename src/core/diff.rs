//! Structural comparison of two document trees.
//!
//! Produces one [`Difference`] per location whose value changed, was removed
//! or was added. Arrays are compared as a whole; a changed array yields a
//! single difference carrying the entire old array.

use serde::Serialize;
use serde_json::Value;

/// A location whose value differs between two documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Difference {
    /// Dot-joined object keys, empty for the document root.
    pub path: String,
    /// Value at `path` in the old document; `None` for newly added keys.
    pub old_value: Option<Value>,
}

impl Difference {
    pub fn new(path: impl Into<String>, old_value: Option<Value>) -> Self {
        Self {
            path: path.into(),
            old_value,
        }
    }

    /// Old value if it is a string, the only kind that can be a cache key.
    pub fn old_string(&self) -> Option<&str> {
        self.old_value.as_ref().and_then(Value::as_str)
    }

    /// True for keys that exist only in the new document.
    pub fn is_addition(&self) -> bool {
        self.old_value.is_none()
    }
}

/// Compare `old` against `new` and list every differing location.
///
/// Object keys are visited in document order: first the keys of `old`
/// (removed or recursed into), then the keys only present in `new`.
pub fn find_differences(old: &Value, new: &Value) -> Vec<Difference> {
    let mut differences = Vec::new();
    collect_differences(old, new, "", &mut differences);
    differences
}

fn collect_differences(old: &Value, new: &Value, path: &str, result: &mut Vec<Difference>) {
    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            for (key, old_value) in old_map {
                let child_path = join_path(path, key);
                match new_map.get(key) {
                    Some(new_value) => {
                        collect_differences(old_value, new_value, &child_path, result)
                    }
                    None => result.push(Difference::new(child_path, Some(old_value.clone()))),
                }
            }

            for key in new_map.keys().filter(|key| !old_map.contains_key(*key)) {
                result.push(Difference::new(join_path(path, key), None));
            }
        }
        (Value::Array(old_items), Value::Array(new_items)) => {
            if old_items != new_items {
                result.push(Difference::new(path, Some(old.clone())));
            }
        }
        _ => {
            if old != new {
                result.push(Difference::new(path, Some(old.clone())));
            }
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
