//! Error serialization across string-only boundaries.
//!
//! [`serialize_error`] always produces a string: a JSON [`ErrorObject`] for
//! errors, plain text for anything else. [`deserialize_error`] turns such a
//! string back into an error when it holds a well-formed envelope and
//! otherwise hands the input back untouched, because the same channel also
//! carries ordinary string payloads.

mod object;

#[cfg(test)]
mod tests;

pub use object::ErrorObject;

use serde_json::Value;

/// A value raised on one side of the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Thrown {
    /// An error-shaped value.
    Error(ErrorObject),
    /// Anything else.
    Value(Value),
}

impl Thrown {
    /// Capture a Rust error as a thrown value.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Thrown::Error(ErrorObject::from_error(err))
    }

    /// The reconstructed error, if this is one.
    pub fn as_error(&self) -> Option<&ErrorObject> {
        match self {
            Thrown::Error(obj) => Some(obj),
            Thrown::Value(_) => None,
        }
    }
}

impl From<ErrorObject> for Thrown {
    fn from(obj: ErrorObject) -> Self {
        Thrown::Error(obj)
    }
}

impl From<Value> for Thrown {
    fn from(value: Value) -> Self {
        Thrown::Value(value)
    }
}

/// Serialize a thrown value to a transport-safe string. Never fails.
///
/// Strings are returned verbatim; other non-error values use their JSON text.
pub fn serialize_error(thrown: &Thrown) -> String {
    match thrown {
        Thrown::Error(obj) => serde_json::to_string(obj).unwrap_or_else(|_| obj.to_string()),
        Thrown::Value(Value::String(text)) => text.clone(),
        Thrown::Value(other) => other.to_string(),
    }
}

/// Reconstruct a thrown value from what crossed the boundary.
///
/// Only a string holding a JSON error envelope becomes [`Thrown::Error`];
/// every other input is returned unchanged as [`Thrown::Value`].
pub fn deserialize_error(value: Value) -> Thrown {
    let parsed = match &value {
        Value::String(text) => parse_error_object(text),
        _ => None,
    };
    match parsed {
        Some(obj) => Thrown::Error(obj),
        None => Thrown::Value(value),
    }
}

fn parse_error_object(text: &str) -> Option<ErrorObject> {
    let parsed: Value = serde_json::from_str(text).ok()?;

    // serde would also accept a positional array for a struct
    if !parsed.is_object() {
        return None;
    }
    let mut obj: ErrorObject = serde_json::from_value(parsed).ok()?;
    if obj.proto.is_empty() {
        obj.proto = obj.name.clone();
    }
    Some(obj)
}
