use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::info;

use crate::{
    config::{ConfigLoadResult, load_config},
    core::{
        LanguageCacheStore, find_differences, is_valid_language_code,
        RemoveKeysReport, remove_differences_from_cache, remove_failed_entries, remove_keys,
    },
    parsers::document::strip_metadata,
};

use super::types::{
    CacheLookupParams, CacheLookupResult, CacheStoreParams, CacheStoreResult,
    ClearLanguageParams, ClearLanguageResult, DocumentFormatParam, LanguageInfo,
    LanguagesResult, ListLanguagesParams, RemoveDifferencesParams, RemoveDifferencesResult,
    RemoveFailuresParams, RemoveKeysParams, RemoveKeysResult,
};

#[derive(Clone)]
pub struct TrcacheMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TrcacheMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TrcacheMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// List languages with a persisted cache
    #[tool(description = "List languages that have a translation cache file, with entry counts.")]
    pub async fn list_languages(
        &self,
        params: Parameters<ListLanguagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let loaded = load_project_config(&params.0.project_root_path)?;
        let cache_dir = loaded.cache_dir();

        let languages = cache_dir
            .languages()
            .map_err(|e| McpError::internal_error(format!("Failed to list languages: {}", e), None))?
            .into_iter()
            .map(|language| {
                let (store, status) = LanguageCacheStore::open(cache_dir.clone(), &language);
                LanguageInfo {
                    entry_count: store.len(),
                    language,
                    status: status.into(),
                }
            })
            .collect();

        json_result(&LanguagesResult {
            cache_dir: cache_dir.path().to_string_lossy().to_string(),
            languages,
        })
    }

    /// Look up cached translations
    #[tool(description = "Look up cached translations for source strings in one language. Returns found translations and missing keys.")]
    pub async fn cache_lookup(
        &self,
        params: Parameters<CacheLookupParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        validate_language(&params.language)?;
        let loaded = load_project_config(&params.project_root_path)?;

        let (store, status) = LanguageCacheStore::open(loaded.cache_dir(), &params.language);
        let mut result = CacheLookupResult {
            language: params.language,
            status: status.into(),
            found: Default::default(),
            missing: Vec::new(),
        };
        for key in params.keys {
            match store.get(&key) {
                Some(value) => {
                    result.found.insert(key, value);
                }
                None => result.missing.push(key),
            }
        }

        json_result(&result)
    }

    /// Store translations in a language cache
    #[tool(description = "Store translated strings in a language cache. Existing entries are overwritten. The cache is saved once after all entries.")]
    pub async fn cache_store(
        &self,
        params: Parameters<CacheStoreParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        validate_language(&params.language)?;
        let loaded = load_project_config(&params.project_root_path)?;

        let (store, _) = LanguageCacheStore::open(loaded.cache_dir(), &params.language);
        let mut added_count = 0;
        let mut updated_count = 0;
        for (key, value) in &params.entries {
            if store.get(key).is_some() {
                updated_count += 1;
            } else {
                added_count += 1;
            }
            store.set(key, value);
        }
        store
            .save()
            .map_err(|e| McpError::internal_error(format!("Failed to save cache: {:#}", e), None))?;

        json_result(&CacheStoreResult {
            language: params.language,
            added_count,
            updated_count,
        })
    }

    /// Remove cache entries made stale by a document change
    #[tool(description = "Compare an old and a new version of a message document and remove the cached translations of every changed or removed string for one language.")]
    pub async fn remove_differences(
        &self,
        params: Parameters<RemoveDifferencesParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut params = params.0;
        validate_language(&params.language)?;
        let loaded = load_project_config(&params.project_root_path)?;

        let include_metadata = params
            .include_metadata
            .unwrap_or(loaded.config.include_metadata);
        if params.format == DocumentFormatParam::Arb && !include_metadata {
            strip_metadata(&mut params.old);
            strip_metadata(&mut params.new);
        }

        let differences = find_differences(&params.old, &params.new);
        let store = LanguageCacheStore::new(loaded.cache_dir());
        let report = remove_differences_from_cache(&store, &differences, &params.language)
            .map_err(|e| {
                McpError::internal_error(format!("Failed to invalidate cache: {:#}", e), None)
            })?;

        json_result(&RemoveDifferencesResult {
            language: report.language,
            differences: differences.into_iter().map(|d| d.path).collect(),
            keys: report.keys,
            removed_count: report.removed_count,
        })
    }

    /// Remove explicit source strings from language caches
    #[tool(description = "Remove source strings (and their placeholder-normalized forms) from the given language caches, or from every cached language when none are given.")]
    pub async fn remove_keys(
        &self,
        params: Parameters<RemoveKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        if params.keys.is_empty() {
            return Err(McpError::invalid_params(
                "'keys' must be a non-empty list".to_string(),
                None,
            ));
        }
        if let Some(languages) = &params.languages {
            for language in languages {
                validate_language(language)?;
            }
        }
        let loaded = load_project_config(&params.project_root_path)?;

        let report = remove_keys(
            &loaded.cache_dir(),
            &params.keys,
            params.languages.as_deref(),
        )
        .map_err(|e| McpError::internal_error(format!("Failed to remove keys: {:#}", e), None))?;

        json_result(&removed_keys_result(report))
    }

    /// Remove cached translation failures
    #[tool(description = "Remove entries whose cached value is the configured failure text, so those strings are translated again. Processes the given languages, or every cached language when none are given.")]
    pub async fn remove_failures(
        &self,
        params: Parameters<RemoveFailuresParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        if let Some(languages) = &params.languages {
            for language in languages {
                validate_language(language)?;
            }
        }
        let loaded = load_project_config(&params.project_root_path)?;

        let report = remove_failed_entries(
            &loaded.cache_dir(),
            &loaded.config.failure_text,
            params.languages.as_deref(),
        )
        .map_err(|e| {
            McpError::internal_error(format!("Failed to remove failures: {:#}", e), None)
        })?;

        json_result(&removed_keys_result(report))
    }

    /// Delete a language cache file
    #[tool(description = "Delete the translation cache file of one language.")]
    pub async fn clear_language(
        &self,
        params: Parameters<ClearLanguageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        validate_language(&params.language)?;
        let loaded = load_project_config(&params.project_root_path)?;

        let cleared = loaded
            .cache_dir()
            .clear(&params.language)
            .map_err(|e| McpError::internal_error(format!("Failed to clear cache: {:#}", e), None))?;

        json_result(&ClearLanguageResult {
            language: params.language,
            cleared,
        })
    }
}

#[tool_handler]
impl ServerHandler for TrcacheMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "trcache MCP manages per-language translation caches for i18n message files.\n\n\
                 Available tools:\n\
                 1. list_languages - List cached languages and their entry counts\n\
                 2. cache_lookup - Look up cached translations for source strings\n\
                 3. cache_store - Store translations in a language cache\n\
                 4. remove_differences - Invalidate translations whose source text changed between two document versions\n\
                 5. remove_keys - Invalidate explicit source strings in one or more languages\n\
                 6. remove_failures - Remove cached translation failures so they are retried\n\
                 7. clear_language - Delete a language cache\n\n\
                 Recommended Workflow:\n\
                 1. After editing the source message file, call remove_differences for every target language\n\
                 2. Use cache_lookup to find which strings still need translating\n\
                 3. Store new translations with cache_store"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn load_project_config(project_root_path: &str) -> Result<ConfigLoadResult, McpError> {
    load_config(Path::new(project_root_path))
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))
}

fn validate_language(language: &str) -> Result<(), McpError> {
    if is_valid_language_code(language) {
        Ok(())
    } else {
        Err(McpError::invalid_params(
            format!("Invalid language code: \"{}\"", language),
            None,
        ))
    }
}

fn removed_keys_result(report: RemoveKeysReport) -> RemoveKeysResult {
    let removed_count = report.removed_count();
    RemoveKeysResult {
        removed: report
            .languages
            .into_iter()
            .map(|(language, language_report)| (language, language_report.keys))
            .collect(),
        removed_count,
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            info!("starting MCP server on stdio");
            let service = TrcacheMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
