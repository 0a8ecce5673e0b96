use std::collections::BTreeMap;

use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use trcache::mcp::{
    TrcacheMcpServer,
    types::{CacheLookupParams, CacheStoreParams},
};

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_language};

// ============================================================================
// cache_lookup tests
// ============================================================================

#[tokio::test]
async fn test_cache_lookup_splits_found_and_missing() {
    let fixture = fixture_multi_language().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(CacheLookupParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
        keys: vec!["Hello".to_string(), "Goodbye".to_string()],
    });

    let result = server.cache_lookup(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "loaded");
    assert_eq!(json_result["found"], json!({"Hello": "Hola"}));
    assert_eq!(json_result["missing"], json!(["Goodbye"]));
}

#[tokio::test]
async fn test_cache_lookup_missing_language() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(CacheLookupParams {
        project_root_path: fixture.root(),
        language: "it".to_string(),
        keys: vec!["Hello".to_string()],
    });

    let result = server.cache_lookup(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["status"], "missing");
    assert_eq!(json_result["missing"], json!(["Hello"]));
}

#[tokio::test]
async fn test_cache_lookup_rejects_path_like_language() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(CacheLookupParams {
        project_root_path: fixture.root(),
        language: "../es".to_string(),
        keys: vec!["Hello".to_string()],
    });

    assert!(server.cache_lookup(params).await.is_err());
}

// ============================================================================
// cache_store tests
// ============================================================================

#[tokio::test]
async fn test_cache_store_counts_added_and_updated() {
    let fixture = fixture_multi_language().unwrap();
    let server = TrcacheMcpServer::new();

    let entries = BTreeMap::from([
        ("Hello".to_string(), "¡Hola!".to_string()),
        ("Welcome".to_string(), "Bienvenido".to_string()),
    ]);
    let params = Parameters(CacheStoreParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
        entries,
    });

    let result = server.cache_store(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["addedCount"], 1);
    assert_eq!(json_result["updatedCount"], 1);

    let cache = fixture.read_cache_file("es").unwrap();
    assert_eq!(cache["Hello"], "¡Hola!");
    assert_eq!(cache["Welcome"], "Bienvenido");
    assert_eq!(cache["Submit"], "Enviar");
}

#[tokio::test]
async fn test_cache_store_creates_cache_dir() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(CacheStoreParams {
        project_root_path: fixture.root(),
        language: "zh-CN".to_string(),
        entries: BTreeMap::from([("Hello".to_string(), "你好".to_string())]),
    });

    server.cache_store(params).await.unwrap();

    let cache = fixture.read_cache_file("zh-CN").unwrap();
    assert_eq!(cache, json!({"Hello": "你好"}));
}
