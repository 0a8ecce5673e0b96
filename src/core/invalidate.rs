//! Cache invalidation.
//!
//! Turns document differences, or an explicit list of source strings, into
//! cache key removals. Every string maps to its literal key and, when it
//! contains placeholders, to its normalized key as well. Each language is
//! persisted once after all of its removals.

use std::collections::BTreeMap;

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::{CacheDir, Difference, LanguageCacheStore, normalize_key};

/// Result of invalidating one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidationReport {
    pub language: String,
    /// Every key derived from the input, in processing order.
    pub keys: Vec<String>,
    /// Number of derived keys that were actually present in the cache.
    pub removed_count: usize,
}

/// Result of [`remove_keys`], keyed by language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveKeysReport {
    pub languages: BTreeMap<String, InvalidationReport>,
}

impl RemoveKeysReport {
    pub fn removed_count(&self) -> usize {
        self.languages.values().map(|r| r.removed_count).sum()
    }
}

/// Cache keys implied by a source string: the literal, then the normalized
/// form when it differs.
pub fn derive_cache_keys(text: &str) -> Vec<String> {
    let normalized = normalize_key(text);
    if normalized.is_changed() {
        vec![text.to_string(), normalized.key]
    } else {
        vec![text.to_string()]
    }
}

/// Remove the cache entries made stale by `differences` for `lang`.
///
/// Only string old values are considered; objects, arrays, numbers, null and
/// additions were never cache keys. If `lang` is not the store's active
/// language it is loaded first. The store is saved once at the end.
pub fn remove_differences_from_cache(
    store: &LanguageCacheStore,
    differences: &[Difference],
    lang: &str,
) -> Result<InvalidationReport> {
    ensure_active(store, lang);

    let mut report = InvalidationReport {
        language: lang.to_string(),
        ..Default::default()
    };

    for text in differences.iter().filter_map(Difference::old_string) {
        remove_derived_keys(store, text, &mut report);
    }

    store.save()?;
    info!(
        language = lang,
        differences = differences.len(),
        removed = report.removed_count,
        "invalidated changed entries"
    );
    Ok(report)
}

/// Remove `keys` (and their normalized forms) from several language caches.
///
/// With no languages given, every language persisted in `dir` is processed.
/// Languages are independent stores, so they are handled in parallel.
pub fn remove_keys(
    dir: &CacheDir,
    keys: &[String],
    languages: Option<&[String]>,
) -> Result<RemoveKeysReport> {
    for_each_language(dir, languages, |lang| remove_keys_for_language(dir, keys, lang))
}

/// Remove every entry whose cached value is `failure_text`, so the next
/// translation pass asks the backend again.
///
/// Languages are selected the same way as in [`remove_keys`].
pub fn remove_failed_entries(
    dir: &CacheDir,
    failure_text: &str,
    languages: Option<&[String]>,
) -> Result<RemoveKeysReport> {
    for_each_language(dir, languages, |lang| {
        let (store, status) = LanguageCacheStore::open(dir.clone(), lang);
        debug!(language = lang, ?status, "removing failed translations");

        let keys = store.keys_with_value(failure_text);
        let removed_count = keys.iter().filter(|key| store.remove(key.as_str())).count();
        store.save()?;

        info!(language = lang, removed = removed_count, "removed failed translations");
        Ok(InvalidationReport {
            language: lang.to_string(),
            keys,
            removed_count,
        })
    })
}

fn for_each_language<F>(
    dir: &CacheDir,
    languages: Option<&[String]>,
    process: F,
) -> Result<RemoveKeysReport>
where
    F: Fn(&str) -> Result<InvalidationReport> + Sync,
{
    let languages = match languages {
        Some(languages) if !languages.is_empty() => languages.to_vec(),
        _ => dir.languages()?,
    };

    let reports = languages
        .par_iter()
        .map(|lang| process(lang.as_str()))
        .collect::<Result<Vec<_>>>()?;

    Ok(RemoveKeysReport {
        languages: reports
            .into_iter()
            .map(|report| (report.language.clone(), report))
            .collect(),
    })
}

fn remove_keys_for_language(
    dir: &CacheDir,
    keys: &[String],
    lang: &str,
) -> Result<InvalidationReport> {
    let (store, status) = LanguageCacheStore::open(dir.clone(), lang);
    debug!(language = lang, ?status, "removing keys");

    let mut report = InvalidationReport {
        language: lang.to_string(),
        ..Default::default()
    };
    for key in keys {
        remove_derived_keys(&store, key, &mut report);
    }

    store.save()?;
    Ok(report)
}

fn ensure_active(store: &LanguageCacheStore, lang: &str) {
    if store.active_language().as_deref() != Some(lang) {
        debug!(language = lang, "language not active, loading before invalidation");
        store.load(lang);
    }
}

fn remove_derived_keys(store: &LanguageCacheStore, text: &str, report: &mut InvalidationReport) {
    for key in derive_cache_keys(text) {
        if store.remove(&key) {
            report.removed_count += 1;
        }
        report.keys.push(key);
    }
}
