use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::LoadStatus;

// ============================================================
// Shared Types
// ============================================================

/// Format of inline documents passed to `remove_differences`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormatParam {
    #[default]
    Json,
    /// ARB: `@` metadata keys are ignored unless metadata is included
    Arb,
}

/// Outcome of loading a language cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CacheStatus {
    Loaded,
    Missing,
    Corrupt,
}

impl From<LoadStatus> for CacheStatus {
    fn from(status: LoadStatus) -> Self {
        match status {
            LoadStatus::Loaded => Self::Loaded,
            LoadStatus::Missing => Self::Missing,
            LoadStatus::Corrupt => Self::Corrupt,
        }
    }
}

// ============================================================
// Languages Types (list_languages)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListLanguagesParams {
    /// Absolute path of the project holding .trcacherc.json
    pub project_root_path: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResult {
    pub cache_dir: String,
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub language: String,
    pub entry_count: usize,
    pub status: CacheStatus,
}

// ============================================================
// Entry Types (cache_lookup, cache_store)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheLookupParams {
    pub project_root_path: String,
    /// Target language code (e.g., "es", "zh-CN")
    pub language: String,
    /// Source strings to look up
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheLookupResult {
    pub language: String,
    pub status: CacheStatus,
    /// Cached translations for the keys that were found
    pub found: BTreeMap<String, String>,
    /// Keys with no cached translation
    pub missing: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheStoreParams {
    pub project_root_path: String,
    pub language: String,
    /// Source string -> translated string
    pub entries: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheStoreResult {
    pub language: String,
    pub added_count: usize,
    pub updated_count: usize,
}

// ============================================================
// Invalidation Types (remove_differences, remove_keys, remove_failures, clear_language)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDifferencesParams {
    pub project_root_path: String,
    /// Target language whose cache is invalidated
    pub language: String,
    /// Previous version of the message document
    pub old: Value,
    /// New version of the message document
    pub new: Value,
    #[serde(default)]
    pub format: DocumentFormatParam,
    /// Compare ARB metadata keys too (defaults to the config value)
    pub include_metadata: Option<bool>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDifferencesResult {
    pub language: String,
    /// Paths of every difference found
    pub differences: Vec<String>,
    /// Cache keys derived from changed strings
    pub keys: Vec<String>,
    pub removed_count: usize,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveKeysParams {
    pub project_root_path: String,
    /// Source strings to remove; placeholder-normalized forms are removed too
    pub keys: Vec<String>,
    /// Languages to process; all cached languages when omitted or empty
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveKeysResult {
    /// Keys processed per language
    pub removed: BTreeMap<String, Vec<String>>,
    pub removed_count: usize,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFailuresParams {
    pub project_root_path: String,
    /// Languages to process; all cached languages when omitted or empty
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearLanguageParams {
    pub project_root_path: String,
    pub language: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearLanguageResult {
    pub language: String,
    /// False when the language had no cache file
    pub cleared: bool,
}
