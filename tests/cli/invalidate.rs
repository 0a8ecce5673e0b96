use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::{CliTest, stderr};

fn setup() -> Result<CliTest> {
    let test = CliTest::with_file(
        "messages/en_old.json",
        r#"{"greeting": "Hello {name}", "farewell": "Bye", "count": 3}"#,
    )?;
    test.write_file(
        "messages/en_new.json",
        r#"{"greeting": "Hi {name}", "farewell": "Bye", "count": 4, "extra": "New"}"#,
    )?;
    test.write_cache(
        "es",
        r#"{"Hello {name}": "Hola {name}", "Hello __HB0__": "Hola __HB0__", "Bye": "Adiós"}"#,
    )?;
    test.write_cache("fr", r#"{"Hello {name}": "Bonjour {name}"}"#)?;
    Ok(test)
}

#[test]
fn test_invalidate_removes_changed_strings() -> Result<()> {
    let test = setup()?;

    assert_cmd_snapshot!(
        test.command().args([
            "invalidate",
            "messages/en_old.json",
            "messages/en_new.json",
            "--target",
            "es",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Removed 2 cache key(s) for es (3 difference(s), 2 key(s) checked)

    ----- stderr -----
    "
    );

    assert_eq!(test.read_cache("es")?, json!({"Bye": "Adiós"}));
    // Only the target language is touched
    assert_eq!(
        test.read_cache("fr")?,
        json!({"Hello {name}": "Bonjour {name}"})
    );

    Ok(())
}

#[test]
fn test_invalidate_verbose_lists_keys() -> Result<()> {
    let test = setup()?;

    // -v also raises the log level; keep stderr quiet for the snapshot
    assert_cmd_snapshot!(
        test.command().env("TRCACHE_LOG", "off").args([
            "invalidate",
            "messages/en_old.json",
            "messages/en_new.json",
            "-t",
            "es",
            "-v",
        ]),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    - greeting  "Hello {name}"
    - count     3
    + extra     (added)

    Removed 2 cache key(s) for es (3 difference(s), 2 key(s) checked)
      - "Hello {name}"
      - "Hello __HB0__"

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_invalidate_creates_cache_for_new_language() -> Result<()> {
    let test = setup()?;

    let output = test
        .command()
        .args([
            "invalidate",
            "messages/en_old.json",
            "messages/en_new.json",
            "-t",
            "de",
        ])
        .output()?;
    assert!(output.status.success());
    assert_eq!(test.read_cache("de")?, json!({}));

    Ok(())
}

#[test]
fn test_invalidate_missing_document_leaves_cache_alone() -> Result<()> {
    let test = setup()?;

    let output = test
        .command()
        .args(["invalidate", "missing.json", "messages/en_new.json", "-t", "es"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read document"));
    assert_eq!(test.read_cache("es")?["Bye"], "Adiós");
    assert_eq!(test.read_cache("es")?["Hello {name}"], "Hola {name}");

    Ok(())
}
