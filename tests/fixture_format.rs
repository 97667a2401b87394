//! Integration tests pinning the on-disk fixture format.
//!
//! Fixtures are shared test data, so their exact shape matters: a pretty-printed JSON
//! object keyed by method name, camelCase field names, and parameters as an ordered
//! array of name/type pairs. These tests keep that format stable.

use sigbench::{prelude::*, Result};
use std::path::PathBuf;

fn temp_fixture(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

/// Test the exact serialized shape of a small fixture.
#[test]
fn test_fixture_document_shape() -> Result<()> {
    let mut descriptors = DescriptorMap::new();
    descriptors.insert(
        "Probe".to_string(),
        MethodDescriptor {
            method_name: "Probe".to_string(),
            parameters: vec![
                ParameterDescriptor::new("arg_ab", PrimitiveKind::String),
                ParameterDescriptor::new("arg_cd", PrimitiveKind::R8),
            ],
        },
    );

    let path = temp_fixture("sigbench_format_shape.json");
    save_descriptors(&descriptors, &path)?;

    let json = std::fs::read_to_string(&path)?;
    let expected = r#"{
  "Probe": {
    "methodName": "Probe",
    "parameters": [
      {
        "parameterName": "arg_ab",
        "parameterType": "string"
      },
      {
        "parameterName": "arg_cd",
        "parameterType": "double"
      }
    ]
  }
}"#;
    assert_eq!(json, expected);

    std::fs::remove_file(&path)?;
    Ok(())
}

/// Test that fixture keys are emitted in sorted order regardless of insertion order.
#[test]
fn test_fixture_keys_are_sorted() -> Result<()> {
    let mut descriptors = DescriptorMap::new();
    for name in ["Zulu", "Alpha", "Mike"] {
        descriptors.insert(
            name.to_string(),
            MethodDescriptor {
                method_name: name.to_string(),
                parameters: Vec::new(),
            },
        );
    }

    let path = temp_fixture("sigbench_format_keys.json");
    save_descriptors(&descriptors, &path)?;

    let json = std::fs::read_to_string(&path)?;
    let alpha = json.find("\"Alpha\"").unwrap();
    let mike = json.find("\"Mike\"").unwrap();
    let zulu = json.find("\"Zulu\"").unwrap();
    assert!(alpha < mike);
    assert!(mike < zulu);

    std::fs::remove_file(&path)?;
    Ok(())
}

/// Test that a hand-written fixture document loads and rebuilds like a generated one.
#[test]
fn test_handwritten_fixture_loads() -> Result<()> {
    let document = r#"{
  "Handmade": {
    "methodName": "Handmade",
    "parameters": [
      { "parameterName": "arg_x", "parameterType": "int" },
      { "parameterName": "arg_y", "parameterType": "object" }
    ]
  }
}"#;

    let path = temp_fixture("sigbench_format_handwritten.json");
    std::fs::write(&path, document)?;

    let handle = rebuild_from_json(&path, "Handmade")?;
    assert_eq!(handle.params()[0].kind, PrimitiveKind::I4);
    assert_eq!(handle.params()[1].kind, PrimitiveKind::Object);
    assert_eq!(render_concat(&handle), "Handmade(arg_x,arg_y)");

    std::fs::remove_file(&path)?;
    Ok(())
}

/// Test that an unsupported type tag is accepted at load time but rejected during
/// reconstruction.
#[test]
fn test_unknown_tag_fails_at_rebuild_not_load() -> Result<()> {
    let document = r#"{
  "Odd": {
    "methodName": "Odd",
    "parameters": [
      { "parameterName": "arg_q", "parameterType": "decimal" }
    ]
  }
}"#;

    let path = temp_fixture("sigbench_format_unknown_tag.json");
    std::fs::write(&path, document)?;

    // Loading succeeds: tags stay textual in the model
    let descriptors = load_descriptors(&path)?;
    assert_eq!(descriptors["Odd"].parameters[0].parameter_type, "decimal");

    // Rebuilding resolves tags and fails
    let result = rebuild_from_json(&path, "Odd");
    assert!(matches!(result, Err(Error::UnknownTypeTag(tag)) if tag == "decimal"));

    std::fs::remove_file(&path)?;
    Ok(())
}

/// Test that a missing fixture file surfaces as a file error, not a panic.
#[test]
fn test_missing_fixture_is_file_error() {
    let path = temp_fixture("sigbench_format_nonexistent.json");
    let result = rebuild_from_json(&path, "Anything");
    assert!(matches!(result, Err(Error::FileError(_))));
}

/// Test that a structurally valid JSON document with the wrong shape is a parse error.
#[test]
fn test_wrong_document_shape_is_parse_error() -> Result<()> {
    let path = temp_fixture("sigbench_format_wrong_shape.json");
    std::fs::write(&path, r#"{ "Probe": ["not", "a", "descriptor"] }"#)?;

    let result = load_descriptors(&path);
    assert!(matches!(result, Err(Error::ParseError(_))));

    std::fs::remove_file(&path)?;
    Ok(())
}
