//! Per-language translation cache storage.
//!
//! Each language lives in its own `<lang>.json` file inside a cache directory.
//! A [`LanguageCacheStore`] holds exactly one of those files in memory at a
//! time (the *active* language) and serializes every access through a mutex.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

const CACHE_FILE_EXTENSION: &str = "json";

/// Returns true if `lang` is safe to use as a cache file stem.
///
/// Only ASCII letters, digits, `-` and `_` are accepted, which keeps every
/// language inside the cache directory.
pub fn is_valid_language_code(lang: &str) -> bool {
    !lang.is_empty()
        && lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Directory holding one cache file per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDir {
    root: PathBuf,
}

impl CacheDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Backing file for `lang`.
    pub fn file_for(&self, lang: &str) -> PathBuf {
        self.root.join(format!("{}.{}", lang, CACHE_FILE_EXTENSION))
    }

    /// Languages with a persisted cache file, sorted.
    ///
    /// Files whose stem is not a valid language code (such as a bare
    /// `.json`) are skipped.
    ///
    /// A missing directory simply has no languages.
    pub fn languages(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(&self.root.to_string_lossy()),
            CACHE_FILE_EXTENSION
        );
        let entries = glob::glob(&pattern)
            .with_context(|| format!("Invalid cache directory pattern: {}", pattern))?;

        let mut languages: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
            })
            .filter(|stem| is_valid_language_code(stem))
            .collect();
        languages.sort();
        Ok(languages)
    }

    /// Delete the backing file for `lang`.
    ///
    /// Returns false when the language had no cache file.
    pub fn clear(&self, lang: &str) -> Result<bool> {
        let path = self.file_for(lang);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete cache file: {}", path.display()))?;
        info!(language = lang, path = %path.display(), "cleared language cache");
        Ok(true)
    }
}

/// Outcome of [`LanguageCacheStore::load`].
///
/// Loading never fails: an unreadable cache behaves like a cold one, but the
/// status tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The cache file was read and parsed.
    Loaded,
    /// No cache file exists yet for this language.
    Missing,
    /// A cache file exists but could not be read or parsed; starting empty.
    Corrupt,
}

#[derive(Debug, Default)]
struct ActiveCache {
    language: Option<String>,
    entries: Map<String, Value>,
}

/// In-memory cache for the active language, backed by a [`CacheDir`].
#[derive(Debug)]
pub struct LanguageCacheStore {
    dir: CacheDir,
    active: Mutex<ActiveCache>,
}

impl LanguageCacheStore {
    pub fn new(dir: CacheDir) -> Self {
        Self {
            dir,
            active: Mutex::new(ActiveCache::default()),
        }
    }

    /// Store with `lang` already loaded.
    pub fn open(dir: CacheDir, lang: &str) -> (Self, LoadStatus) {
        let store = Self::new(dir);
        let status = store.load(lang);
        (store, status)
    }

    pub fn dir(&self) -> &CacheDir {
        &self.dir
    }

    /// Make `lang` the active language, replacing the in-memory mapping.
    ///
    /// Unsaved changes to the previously active language are discarded.
    pub fn load(&self, lang: &str) -> LoadStatus {
        let mut active = self.active.lock();
        let path = self.dir.file_for(lang);

        let (entries, status) = if path.exists() {
            match read_entries(&path) {
                Ok(entries) => (entries, LoadStatus::Loaded),
                Err(err) => {
                    let error = format!("{:#}", err);
                    warn!(
                        language = lang,
                        path = %path.display(),
                        %error,
                        "unreadable cache file, starting empty"
                    );
                    (Map::new(), LoadStatus::Corrupt)
                }
            }
        } else {
            (Map::new(), LoadStatus::Missing)
        };

        debug!(language = lang, entries = entries.len(), ?status, "loaded language cache");
        active.language = Some(lang.to_string());
        active.entries = entries;
        status
    }

    /// Write the active mapping to its backing file, replacing the old content.
    ///
    /// Does nothing when no language has been loaded.
    pub fn save(&self) -> Result<()> {
        let active = self.active.lock();
        let Some(lang) = active.language.as_deref() else {
            return Ok(());
        };

        let path = self.dir.file_for(lang);
        let content = serde_json::to_string_pretty(&active.entries)
            .context("Failed to serialize translation cache")?;
        write_atomically(&path, &format!("{}\n", content))?;

        debug!(language = lang, entries = active.entries.len(), "saved language cache");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.active
            .lock()
            .entries
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Insert or overwrite an entry. Not persisted until [`save`](Self::save).
    pub fn set(&self, key: &str, value: &str) {
        self.active
            .lock()
            .entries
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    /// Keys whose cached value equals `value`, in file order.
    pub fn keys_with_value(&self, value: &str) -> Vec<String> {
        self.active
            .lock()
            .entries
            .iter()
            .filter(|(_, cached)| cached.as_str() == Some(value))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Remove `key` if present. Returns true if an entry was removed.
    pub fn remove(&self, key: &str) -> bool {
        self.active.lock().entries.shift_remove(key).is_some()
    }

    /// Delete the backing file for `lang`; the in-memory mapping is untouched.
    pub fn clear(&self, lang: &str) -> Result<bool> {
        let _active = self.active.lock();
        self.dir.clear(lang)
    }

    pub fn active_language(&self) -> Option<String> {
        self.active.lock().language.clone()
    }

    pub fn len(&self) -> usize {
        self.active.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read a cache file that must hold a JSON object.
///
/// Entries whose value is not a string are kept as-is so a later save does
/// not lose them, but [`LanguageCacheStore::get`] treats them as absent.
fn read_entries(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cache file: {}", path.display()))?;
    let entries: Map<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cache file: {}", path.display()))?;

    let non_string = entries.values().filter(|value| !value.is_string()).count();
    if non_string > 0 {
        warn!(
            path = %path.display(),
            entries = non_string,
            "cache file has non-string values, ignoring them for lookups"
        );
    }
    Ok(entries)
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create cache directory: {}", parent.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write cache file: {}", path.display()))?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to replace cache file: {}", path.display()))?;
    Ok(())
}
