use serde_json::{Map, Value};

use super::{CachedTranslator, TranslationBackend};
use crate::parsers::document::DocumentFormat;

/// How ARB metadata keys (`@name`) are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataPolicy {
    /// Drop `@` keys from the output entirely.
    #[default]
    Exclude,
    /// Translate `@` entries like any other value.
    Include,
}

impl MetadataPolicy {
    pub fn from_include_flag(include: bool) -> Self {
        if include { Self::Include } else { Self::Exclude }
    }
}

impl<B: TranslationBackend + ?Sized> CachedTranslator<'_, B> {
    /// Translate every string in a document tree, keeping its shape.
    ///
    /// Numbers, booleans and null are copied unchanged. `@` keys are only
    /// metadata in ARB files; in plain JSON they are ordinary messages and
    /// `policy` is ignored.
    pub fn translate_document(
        &self,
        value: &Value,
        lang: &str,
        format: DocumentFormat,
        policy: MetadataPolicy,
    ) -> Value {
        let policy = match format {
            DocumentFormat::Arb => policy,
            DocumentFormat::Json => MetadataPolicy::Include,
        };
        self.translate_value(value, lang, policy)
    }

    fn translate_value(&self, value: &Value, lang: &str, policy: MetadataPolicy) -> Value {
        match value {
            Value::Object(map) => {
                let mut translated = Map::with_capacity(map.len());
                for (key, child) in map {
                    if key.starts_with('@') && policy == MetadataPolicy::Exclude {
                        continue;
                    }
                    translated.insert(key.clone(), self.translate_value(child, lang, policy));
                }
                Value::Object(translated)
            }
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.translate_value(item, lang, policy))
                    .collect(),
            ),
            Value::String(text) => {
                Value::String(self.translate_preserving_placeholders(text, lang))
            }
            other => other.clone(),
        }
    }
}
