//! Cache-aware translation over a pluggable backend.
//!
//! The backend is whatever actually produces translations (a browser
//! automation worker, an HTTP API, a test stub). This module only decides
//! when to ask it and what to remember: every answer, including failures,
//! is cached under the placeholder-normalized source string.

mod document;

pub use document::MetadataPolicy;

use tracing::{debug, warn};

use crate::{
    config::Config,
    core::{LanguageCacheStore, normalize_key, restore_placeholders},
};

/// Text cached and returned when the backend cannot translate a string.
pub const DEFAULT_FAILURE_TEXT: &str = "cant translate";

/// Produces a translation for `text` into `lang`.
///
/// Returns `None` when no translation could be produced.
pub trait TranslationBackend: Send + Sync {
    fn translate(&self, text: &str, lang: &str) -> Option<String>;
}

impl<F> TranslationBackend for F
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync,
{
    fn translate(&self, text: &str, lang: &str) -> Option<String> {
        self(text, lang)
    }
}

/// Translates strings through a language cache, falling back to a backend.
///
/// The store must have the target language loaded; saving it afterwards is
/// the caller's job.
pub struct CachedTranslator<'a, B: TranslationBackend + ?Sized> {
    store: &'a LanguageCacheStore,
    backend: &'a B,
    failure_text: String,
}

impl<'a, B: TranslationBackend + ?Sized> CachedTranslator<'a, B> {
    pub fn new(store: &'a LanguageCacheStore, backend: &'a B) -> Self {
        Self {
            store,
            backend,
            failure_text: DEFAULT_FAILURE_TEXT.to_string(),
        }
    }

    /// Translator caching failures as the configured `failureText`.
    pub fn from_config(store: &'a LanguageCacheStore, backend: &'a B, config: &Config) -> Self {
        Self::new(store, backend).with_failure_text(config.failure_text.clone())
    }

    pub fn with_failure_text(mut self, failure_text: impl Into<String>) -> Self {
        self.failure_text = failure_text.into();
        self
    }

    pub fn failure_text(&self) -> &str {
        &self.failure_text
    }

    /// Translate `text` as a single cache key.
    ///
    /// Empty cached values count as misses. Backend failures are cached as
    /// the failure text so they are not retried on every request.
    pub fn translate_text(&self, text: &str, lang: &str) -> String {
        if let Some(cached) = self.store.get(text).filter(|cached| !cached.is_empty()) {
            debug!(language = lang, text, "cache hit");
            return cached;
        }

        let translated = match self.backend.translate(text, lang) {
            Some(translated) => translated,
            None => {
                warn!(language = lang, text, "translation failed");
                self.failure_text.clone()
            }
        };
        self.store.set(text, &translated);
        translated
    }

    /// Translate `text` keyed by its normalized form, keeping placeholders.
    pub fn translate_preserving_placeholders(&self, text: &str, lang: &str) -> String {
        let normalized = normalize_key(text);
        let translated = self.translate_text(&normalized.key, lang);

        if translated == self.failure_text {
            return translated;
        }
        restore_placeholders(&translated, &normalized.placeholders)
    }
}
