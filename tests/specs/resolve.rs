//! Behavioral specs for `lintrc config`.
//!
//! Covers the resolution order (explicit file, package.json, .jshintrc,
//! home directory), `extends` inheritance, and the malformed-file policy.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Resolution order
// =============================================================================

/// > The nearest .jshintrc applies, with extends merged grandparent first
#[test]
fn nearest_jshintrc_with_extends_chain() {
    let temp = Project::empty();
    temp.file("org.json", r#"{ "predef": ["org"], "undef": true }"#);
    temp.file(
        "team/base.json",
        r#"{ "extends": "../org.json", "predef": ["team"] }"#,
    );
    temp.file(
        "team/app/.jshintrc",
        "// app settings\n{ \"extends\": \"../base.json\", \"predef\": [\"app\"] }",
    );

    let json = config("team/app/src/main.js").pwd(temp.path()).json();

    assert_eq!(json["predef"], serde_json::json!(["org", "team", "app"]));
    assert_eq!(json["undef"], true);
    assert!(json.get("extends").is_none());
}

/// > An explicit config file wins and is read without inheritance
#[test]
fn explicit_config_is_flat() {
    let temp = Project::empty();
    temp.file("base.json", r#"{ "undef": true }"#);
    temp.file("pinned.json", r#"{ "extends": "base.json", "curly": true }"#);
    temp.file(".jshintrc", r#"{ "eqeqeq": true }"#);

    let json = config("app.js")
        .pwd(temp.path())
        .args(&["--config", &temp.arg("pinned.json")])
        .json();

    assert_eq!(json, serde_json::json!({ "curly": true }));
}

/// > package.json#jshintConfig is preferred over .jshintrc
#[test]
fn package_json_config() {
    let temp = Project::empty();
    temp.file(
        "package.json",
        r#"{ "name": "x", "jshintConfig": { "esversion": 11 } }"#,
    );
    temp.file(".jshintrc", r#"{ "esversion": 5 }"#);

    let json = config("lib/x.js").pwd(temp.path()).json();
    assert_eq!(json, serde_json::json!({ "esversion": 11 }));
}

/// > ~/.jshintrc applies when nothing closer exists
#[test]
fn home_config_fallback() {
    let home = Project::empty();
    home.file(".jshintrc", r#"{ "node": true }"#);
    let temp = Project::empty();

    let json = config("app.js").pwd(temp.path()).home(home.path()).json();
    assert_eq!(json, serde_json::json!({ "node": true }));
}

/// > Legacy inline options are the last resort
#[test]
fn settings_options_fallback() {
    let temp = Project::empty();
    temp.file("settings.json", r#"{ "options": { "browser": true } }"#);

    let json = config("app.js")
        .pwd(temp.path())
        .args(&["--settings", "settings.json"])
        .json();
    assert_eq!(json, serde_json::json!({ "browser": true }));
}

/// > No configuration anywhere resolves to an empty object
#[test]
fn nothing_found_is_empty_object() {
    let temp = Project::empty();
    let json = config("app.js").pwd(temp.path()).json();
    assert_eq!(json, serde_json::json!({}));
}

// =============================================================================
// Failure policy
// =============================================================================

/// > A malformed .jshintrc is reported and degrades to empty options
#[test]
fn malformed_config_reported_not_fatal() {
    let temp = Project::empty();
    temp.file(".jshintrc", "{ \"curly\": true, }");

    let run = config("app.js").pwd(temp.path()).passes();
    assert_eq!(run.stdout().trim(), "{}");
    assert!(
        run.stderr()
            .contains("Failed to read jshint configuration from file")
    );
}

/// > A dangling extends is reported once and the child still applies
#[test]
fn dangling_extends_reported_once() {
    let temp = Project::empty();
    temp.file(".jshintrc", r#"{ "extends": "gone.json", "curly": true }"#);

    let run = config("app.js").pwd(temp.path()).passes();
    let stdout = run.stdout();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "curly": true }));
    assert_eq!(run.stderr().matches("Can't find config file").count(), 1);
}
