//! Tests for prompt config loading.

use crate::error::PromptError;
use crate::prompt_config::{DEFAULT_MAX_TOKENS, PromptConfig, load_json};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn from_json(value: Value) -> Result<PromptConfig, PromptError> {
    match value {
        Value::Object(map) => PromptConfig::from_map(map, Path::new("prompts/test.json")),
        other => panic!("expected object, got {:?}", other),
    }
}

#[test]
fn test_parse_full_config() {
    let config = from_json(json!({
        "template_file": "welcome.txt",
        "output_file": "welcome_ada.txt",
        "variables": {"name": "Ada", "course": "Rust 101"},
        "max_tokens": 1200
    }))
    .unwrap();

    assert_eq!(config.template_file, "welcome.txt");
    assert_eq!(config.output_file, "welcome_ada.txt");
    assert_eq!(config.variables.get("name"), Some(&json!("Ada")));
    assert_eq!(config.variables.len(), 2);
    assert_eq!(config.max_tokens, 1200);
}

#[test]
fn test_defaults_for_optional_fields() {
    let config = from_json(json!({
        "template_file": "welcome.txt",
        "output_file": "out.txt"
    }))
    .unwrap();

    assert!(config.variables.is_empty());
    assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(DEFAULT_MAX_TOKENS, 700);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = from_json(json!({
        "template_file": "welcome.txt",
        "output_file": "out.txt",
        "description": "first week onboarding"
    }))
    .unwrap();

    assert_eq!(config.template_file, "welcome.txt");
}

#[test]
fn test_missing_required_keys_fail_validation() {
    let cases = [
        json!({"output_file": "out.txt", "variables": {"name": "Ada"}, "max_tokens": 50}),
        json!({"template_file": "welcome.txt", "variables": {"name": "Ada"}}),
        json!({"template_file": "", "output_file": "out.txt"}),
        json!({"template_file": "welcome.txt", "output_file": null}),
        json!({}),
    ];

    for case in cases {
        let err = from_json(case.clone()).unwrap_err();
        match err {
            PromptError::ValidationError(msg) => {
                assert!(msg.contains("template_file"), "{}", msg);
                assert!(msg.contains("prompts/test.json"), "{}", msg);
            }
            other => panic!("unexpected error for {}: {:?}", case, other),
        }
    }
}

#[test]
fn test_wrong_types_fail_validation() {
    let cases = [
        json!({"template_file": 5, "output_file": "out.txt"}),
        json!({"template_file": "t.txt", "output_file": "out.txt", "variables": ["name"]}),
        json!({"template_file": "t.txt", "output_file": "out.txt", "max_tokens": "many"}),
        json!({"template_file": "t.txt", "output_file": "out.txt", "max_tokens": -1}),
    ];

    for case in cases {
        let err = from_json(case.clone()).unwrap_err();
        assert!(
            matches!(err, PromptError::ValidationError(_)),
            "unexpected error for {}: {:?}",
            case,
            err
        );
    }
}

#[test]
fn test_zero_max_tokens_fails_validation() {
    let err = from_json(json!({
        "template_file": "t.txt",
        "output_file": "out.txt",
        "max_tokens": 0
    }))
    .unwrap_err();

    assert!(matches!(err, PromptError::ValidationError(_)));
    assert!(err.to_string().contains("max_tokens"));
}

#[test]
fn test_output_file_must_stay_inside_outputs() {
    for output_file in ["../escape.txt", "/tmp/abs.txt", "week1/../../x.txt"] {
        let err = from_json(json!({
            "template_file": "t.txt",
            "output_file": output_file
        }))
        .unwrap_err();
        assert!(
            matches!(err, PromptError::ValidationError(_)),
            "expected validation error for {}",
            output_file
        );
    }

    let config = from_json(json!({
        "template_file": "t.txt",
        "output_file": "week1/feedback.txt"
    }))
    .unwrap();
    assert_eq!(config.output_file, "week1/feedback.txt");
}

#[test]
fn test_load_json_reads_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("welcome.json");
    fs::write(&path, r#"{"template_file": "welcome.txt", "extra": [1, 2]}"#).unwrap();

    let map = load_json(&path).unwrap();
    assert_eq!(map.get("template_file"), Some(&json!("welcome.txt")));
    assert_eq!(map.get("extra"), Some(&json!([1, 2])));
}

#[test]
fn test_load_json_missing_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_json(temp_dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, PromptError::ParseError(_)));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_load_json_invalid_json_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{\"template_file\": ").unwrap();

    let err = load_json(&path).unwrap_err();
    assert!(matches!(err, PromptError::ParseError(_)));
}

#[test]
fn test_load_json_non_object_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("list.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let err = load_json(&path).unwrap_err();
    assert!(matches!(err, PromptError::ParseError(_)));
}

#[test]
fn test_load_validates_after_parsing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("incomplete.json");
    fs::write(&path, r#"{"template_file": "welcome.txt"}"#).unwrap();

    let map = load_json(&path).unwrap();
    let err = PromptConfig::from_map(map, &path).unwrap_err();
    match err {
        PromptError::ValidationError(msg) => assert!(msg.contains("incomplete.json")),
        other => panic!("unexpected error: {:?}", other),
    }
}
