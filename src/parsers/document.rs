use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

/// Message file formats understood by the document loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Plain nested JSON messages.
    Json,
    /// Flutter Application Resource Bundle: JSON with `@` metadata keys.
    Arb,
}

impl DocumentFormat {
    /// Detect the format from the file extension; anything but `.arb` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("arb") => Self::Arb,
            _ => Self::Json,
        }
    }
}

/// Parse a document from a string. `source` names it in error messages.
pub fn parse_document_str(content: &str, source: &str) -> Result<Value> {
    serde_json::from_str(content).with_context(|| format!("Failed to parse JSON document: {}", source))
}

/// Read and parse a JSON or ARB file.
pub fn parse_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    parse_document_str(&content, &path.display().to_string())
}

/// Read a document for diffing, dropping ARB metadata unless it is included.
pub fn load_document(path: &Path, include_metadata: bool) -> Result<Value> {
    let mut value = parse_document(path)?;
    if DocumentFormat::from_path(path) == DocumentFormat::Arb && !include_metadata {
        strip_metadata(&mut value);
    }
    Ok(value)
}

/// Recursively remove every object key starting with `@`.
pub fn strip_metadata(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| !key.starts_with('@'));
            for child in map.values_mut() {
                strip_metadata(child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(strip_metadata),
        _ => {}
    }
}
