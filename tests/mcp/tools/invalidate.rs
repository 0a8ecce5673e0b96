use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use trcache::mcp::{
    TrcacheMcpServer,
    types::{
        ClearLanguageParams, DocumentFormatParam, RemoveDifferencesParams, RemoveFailuresParams,
        RemoveKeysParams,
    },
};

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_language};

// ============================================================================
// remove_differences tests
// ============================================================================

#[tokio::test]
async fn test_remove_differences_drops_changed_strings() {
    let fixture = fixture_multi_language().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(RemoveDifferencesParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
        old: json!({"greeting": "Hello", "form": {"submit": "Submit"}}),
        new: json!({"greeting": "Hi", "form": {"submit": "Submit"}, "extra": "New"}),
        format: DocumentFormatParam::Json,
        include_metadata: None,
    });

    let result = server.remove_differences(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["differences"], json!(["greeting", "extra"]));
    assert_eq!(json_result["keys"], json!(["Hello"]));
    assert_eq!(json_result["removedCount"], 1);

    let cache = fixture.read_cache_file("es").unwrap();
    assert!(cache.get("Hello").is_none());
    assert_eq!(cache["Submit"], "Enviar");

    // Other languages are untouched
    let fr = fixture.read_cache_file("fr").unwrap();
    assert_eq!(fr["Hello"], "Bonjour");
}

#[tokio::test]
async fn test_remove_differences_removes_normalized_key() {
    let fixture = McpTestFixture::with_caches(vec![(
        "es",
        json!({
            "Hi {name}": "Hola {name}",
            "Hi __HB0__": "Hola __HB0__",
            "Bye": "Adiós"
        }),
    )])
    .unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(RemoveDifferencesParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
        old: json!({"greeting": "Hi {name}"}),
        new: json!({"greeting": "Hello {name}"}),
        format: DocumentFormatParam::Json,
        include_metadata: None,
    });

    let result = server.remove_differences(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["removedCount"], 2);
    assert_eq!(
        fixture.read_cache_file("es").unwrap(),
        json!({"Bye": "Adiós"})
    );
}

#[tokio::test]
async fn test_remove_differences_ignores_arb_metadata_by_default() {
    let fixture = McpTestFixture::with_caches(vec![(
        "es",
        json!({"It's a title": "Es un título", "Flash Cards": "Tarjetas"}),
    )])
    .unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(RemoveDifferencesParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
        old: json!({"flashCards": "Flash Cards", "@flashCards": {"description": "It's a title"}}),
        new: json!({"flashCards": "Flash Cards", "@flashCards": {"description": "A title"}}),
        format: DocumentFormatParam::Arb,
        include_metadata: None,
    });

    let result = server.remove_differences(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["differences"], json!([]));
    assert_eq!(json_result["removedCount"], 0);
    assert_eq!(
        fixture.read_cache_file("es").unwrap()["It's a title"],
        "Es un título"
    );
}

#[tokio::test]
async fn test_remove_differences_includes_arb_metadata_when_asked() {
    let fixture = McpTestFixture::with_caches(vec![(
        "es",
        json!({"It's a title": "Es un título"}),
    )])
    .unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(RemoveDifferencesParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
        old: json!({"@flashCards": {"description": "It's a title"}}),
        new: json!({"@flashCards": {"description": "A title"}}),
        format: DocumentFormatParam::Arb,
        include_metadata: Some(true),
    });

    let result = server.remove_differences(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["differences"], json!(["@flashCards.description"]));
    assert_eq!(json_result["removedCount"], 1);
}

// ============================================================================
// remove_keys tests
// ============================================================================

#[tokio::test]
async fn test_remove_keys_defaults_to_all_languages() {
    let fixture = fixture_multi_language().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(RemoveKeysParams {
        project_root_path: fixture.root(),
        keys: vec!["Submit".to_string()],
        languages: None,
    });

    let result = server.remove_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["removedCount"], 2);
    assert_eq!(json_result["removed"]["es"], json!(["Submit"]));
    assert_eq!(json_result["removed"]["fr"], json!(["Submit"]));
    assert!(fixture.read_cache_file("es").unwrap().get("Submit").is_none());
    assert!(fixture.read_cache_file("fr").unwrap().get("Submit").is_none());
}

#[tokio::test]
async fn test_remove_keys_limited_to_given_languages() {
    let fixture = fixture_multi_language().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(RemoveKeysParams {
        project_root_path: fixture.root(),
        keys: vec!["Hello".to_string()],
        languages: Some(vec!["fr".to_string()]),
    });

    let result = server.remove_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["removedCount"], 1);
    assert!(json_result["removed"].get("es").is_none());
    assert_eq!(fixture.read_cache_file("es").unwrap()["Hello"], "Hola");
}

#[tokio::test]
async fn test_remove_keys_requires_keys() {
    let fixture = fixture_multi_language().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(RemoveKeysParams {
        project_root_path: fixture.root(),
        keys: Vec::new(),
        languages: None,
    });

    assert!(server.remove_keys(params).await.is_err());
}

// ============================================================================
// remove_failures tests
// ============================================================================

#[tokio::test]
async fn test_remove_failures_uses_configured_failure_text() {
    let fixture = McpTestFixture::with_caches(vec![
        ("es", json!({"Hello": "Hola", "Banner": "n/a"})),
        ("fr", json!({"Hello": "n/a", "Bye": "cant translate"})),
    ])
    .unwrap();
    fixture.write_config(&json!({"failureText": "n/a"})).unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(RemoveFailuresParams {
        project_root_path: fixture.root(),
        languages: None,
    });

    let result = server.remove_failures(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["removedCount"], 2);
    assert_eq!(json_result["removed"]["es"], json!(["Banner"]));
    assert_eq!(fixture.read_cache_file("es").unwrap(), json!({"Hello": "Hola"}));
    assert_eq!(
        fixture.read_cache_file("fr").unwrap(),
        json!({"Bye": "cant translate"})
    );
}

// ============================================================================
// clear_language tests
// ============================================================================

#[tokio::test]
async fn test_clear_language_deletes_file() {
    let fixture = fixture_multi_language().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(ClearLanguageParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
    });

    let result = server.clear_language(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["cleared"], true);
    assert!(!fixture.cache_file_exists("es"));
    assert!(fixture.cache_file_exists("fr"));
}

#[tokio::test]
async fn test_clear_language_without_file() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TrcacheMcpServer::new();

    let params = Parameters(ClearLanguageParams {
        project_root_path: fixture.root(),
        language: "es".to_string(),
    });

    let result = server.clear_language(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["cleared"], false);
}
