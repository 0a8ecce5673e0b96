use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::CliTest;

fn setup() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_cache(
        "en",
        r#"{"Hello": "Hello", "Get rid of banner ads forever!": "Get rid of banner ads forever!"}"#,
    )?;
    test.write_cache(
        "es",
        r#"{"Hello": "Hola", "Get rid of banner ads forever!": "¡Elimina los anuncios para siempre!", "Bye": "Adiós"}"#,
    )?;
    Ok(test)
}

#[test]
fn test_remove_keys_from_all_languages() -> Result<()> {
    let test = setup()?;

    assert_cmd_snapshot!(
        test.command().args(["remove-keys", "Get rid of banner ads forever!"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en: removed 1 of 1 key(s)
    es: removed 1 of 1 key(s)
    Removed 2 cache key(s) across 2 language(s)

    ----- stderr -----
    "
    );

    assert_eq!(test.read_cache("en")?, json!({"Hello": "Hello"}));
    assert_eq!(test.read_cache("es")?, json!({"Hello": "Hola", "Bye": "Adiós"}));

    Ok(())
}

#[test]
fn test_remove_keys_for_selected_language() -> Result<()> {
    let test = setup()?;

    let output = test
        .command()
        .args(["remove-keys", "Hello", "Bye", "--lang", "es"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(test.read_cache("en")?["Hello"], "Hello");
    let es = test.read_cache("es")?;
    assert!(es.get("Hello").is_none());
    assert!(es.get("Bye").is_none());

    Ok(())
}

#[test]
fn test_remove_keys_also_removes_normalized_form() -> Result<()> {
    let test = CliTest::new()?;
    test.write_cache("es", r#"{"Hi {name}": "Hola {name}", "Hi __HB0__": "Hola __HB0__"}"#)?;

    let output = test
        .command()
        .args(["remove-keys", "Hi {name}", "-l", "es"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(test.read_cache("es")?, json!({}));

    Ok(())
}

#[test]
fn test_remove_keys_requires_a_key() -> Result<()> {
    let test = setup()?;

    let output = test.command().arg("remove-keys").output()?;
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_purge_failures_uses_configured_failure_text() -> Result<()> {
    let test = CliTest::with_file(".trcacherc.json", r#"{ "failureText": "untranslatable" }"#)?;
    test.write_cache(
        "es",
        r#"{"Hello": "Hola", "Banner": "untranslatable", "Bye": "cant translate"}"#,
    )?;
    test.write_cache("fr", r#"{"Hello": "untranslatable"}"#)?;

    assert_cmd_snapshot!(test.command().args(["purge-failures", "-l", "es"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    es: removed 1 of 1 key(s)
    Removed 1 cache key(s) across 1 language(s)

    ----- stderr -----
    ");

    assert_eq!(
        test.read_cache("es")?,
        json!({"Hello": "Hola", "Bye": "cant translate"})
    );
    assert_eq!(test.read_cache("fr")?, json!({"Hello": "untranslatable"}));

    Ok(())
}

#[test]
fn test_purge_failures_defaults_to_all_languages() -> Result<()> {
    let test = CliTest::new()?;
    test.write_cache("es", r#"{"Hello": "cant translate"}"#)?;
    test.write_cache("fr", r#"{"Hello": "Bonjour", "Bye": "cant translate"}"#)?;

    let output = test.command().arg("purge-failures").output()?;
    assert!(output.status.success());

    assert_eq!(test.read_cache("es")?, json!({}));
    assert_eq!(test.read_cache("fr")?, json!({"Hello": "Bonjour"}));

    Ok(())
}
