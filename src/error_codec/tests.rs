//! Tests for error serialization and best-effort reconstruction.

use super::*;
use crate::error::DenopsTestError;
use serde_json::json;
use std::io;
use std::path::PathBuf;

#[test]
fn test_error_round_trip_preserves_name_and_message() {
    let err = DenopsTestError::MissingRequiredConfig {
        var: "DENOPS_TEST_DENOPS_PATH",
    };

    let encoded = serialize_error(&Thrown::from_error(&err));
    let decoded = deserialize_error(Value::String(encoded));

    let obj = decoded.as_error().expect("envelope should decode to an error");
    assert_eq!(obj.name, "DenopsTestError");
    assert_eq!(obj.proto, "DenopsTestError");
    assert_eq!(obj.message, err.to_string());
    assert_eq!(obj.stack, None);
}

#[test]
fn test_source_chain_becomes_stack() {
    let err = DenopsTestError::ResolvePath {
        path: PathBuf::from("denops.vim"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
    };

    let obj = ErrorObject::from_error(&err);

    let stack = obj.stack.as_deref().unwrap();
    assert!(stack.starts_with("DenopsTestError: failed to resolve path 'denops.vim'"));
    assert!(stack.ends_with("Caused by: access denied"));

    let decoded = deserialize_error(Value::String(serialize_error(&obj.clone().into())));
    assert_eq!(decoded, Thrown::Error(obj));
}

#[test]
fn test_trait_object_errors_are_named_error() {
    let err: Box<dyn std::error::Error> = Box::new(io::Error::other("boom"));

    let obj = ErrorObject::from_error(err.as_ref());

    assert_eq!(obj.name, "Error");
    assert_eq!(obj.message, "boom");
}

#[test]
fn test_encoded_envelope_layout() {
    let obj = ErrorObject::new("TypeError", "x is not a function")
        .with_stack("TypeError: x is not a function\n    at <anonymous>")
        .with_attribute("code", 42);

    let encoded: Value = serde_json::from_str(&serialize_error(&obj.into())).unwrap();

    assert_eq!(
        encoded,
        json!({
            "proto": "TypeError",
            "name": "TypeError",
            "message": "x is not a function",
            "stack": "TypeError: x is not a function\n    at <anonymous>",
            "attributes": {"code": 42},
        })
    );
}

#[test]
fn test_decodes_envelope_from_javascript_side() {
    let raw = r#"{"proto":"Deno.errors.NotFound","name":"NotFound","message":"file missing","stack":"NotFound: file missing\n    at main.ts:1:1","attributes":{}}"#;

    let decoded = deserialize_error(Value::String(raw.to_string()));

    let obj = decoded.as_error().unwrap();
    assert_eq!(obj.proto, "Deno.errors.NotFound");
    assert_eq!(obj.name, "NotFound");
    assert_eq!(obj.to_string(), "NotFound: file missing");
}

#[test]
fn test_minimal_envelope_fills_defaults() {
    let decoded = deserialize_error(json!(r#"{"name":"Error","message":"oops"}"#));

    let obj = decoded.as_error().unwrap();
    assert_eq!(obj.proto, "Error");
    assert!(obj.attributes.is_empty());
    assert!(obj.stack.is_none());
}

#[test]
fn test_plain_strings_pass_through() {
    assert_eq!(
        deserialize_error(json!("not json")),
        Thrown::Value(json!("not json"))
    );
    assert_eq!(deserialize_error(json!("")), Thrown::Value(json!("")));
}

#[test]
fn test_non_string_inputs_pass_through() {
    for value in [json!(42), json!(null), json!(true), json!({"name": "Error", "message": "x"})] {
        assert_eq!(deserialize_error(value.clone()), Thrown::Value(value));
    }
}

#[test]
fn test_json_that_is_not_an_envelope_passes_through() {
    for text in [
        r#""hello""#,
        "42",
        r#"{"foo":1}"#,
        r#"{"name":"Error"}"#,
        r#"{"name":1,"message":"x"}"#,
        r#"{"name":"Error","message":"x","stack":5}"#,
        r#"{"name":"Error","message":"x","stack":null}"#,
        r#"["Error","Error","positional"]"#,
    ] {
        assert_eq!(
            deserialize_error(json!(text)),
            Thrown::Value(json!(text)),
            "input: {}",
            text
        );
    }
}

#[test]
fn test_non_error_values_serialize_as_text() {
    assert_eq!(serialize_error(&Thrown::Value(json!("plain"))), "plain");
    assert_eq!(serialize_error(&Thrown::Value(json!(42))), "42");
    assert_eq!(serialize_error(&Thrown::Value(json!(null))), "null");
    assert_eq!(
        serialize_error(&Thrown::Value(json!({"a": [1, 2]}))),
        r#"{"a":[1,2]}"#
    );
}

#[test]
fn test_serialized_plain_string_is_not_mistaken_for_error() {
    let thrown = Thrown::Value(json!("just a message"));
    let decoded = deserialize_error(Value::String(serialize_error(&thrown)));
    assert_eq!(decoded, thrown);
}

#[test]
fn test_error_object_display() {
    assert_eq!(ErrorObject::new("Error", "").to_string(), "Error");
    assert_eq!(ErrorObject::new("RangeError", "too big").to_string(), "RangeError: too big");
}

#[test]
fn test_null_stack_is_not_an_envelope() {
    let text = r#"{"proto":"Error","name":"Error","message":"x","stack":null,"attributes":{}}"#;

    assert_eq!(deserialize_error(json!(text)), Thrown::Value(json!(text)));

    let without_stack = r#"{"proto":"Error","name":"Error","message":"x","attributes":{}}"#;
    let obj = deserialize_error(json!(without_stack));
    assert_eq!(obj.as_error().unwrap().stack, None);
}
