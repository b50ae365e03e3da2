//! The structured error envelope carried across the boundary.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A serializable snapshot of an error.
///
/// The JSON layout matches the error objects produced by the denops
/// JavaScript side, so envelopes can be exchanged in either direction:
///
/// ```json
/// {"proto":"TypeError","name":"TypeError","message":"...","stack":"...","attributes":{}}
/// ```
///
/// Decoding requires `name` and `message`. A missing `proto` falls back to
/// `name` and missing `attributes` to `{}`, so envelopes from older senders
/// still decode. `stack` may be absent but not `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// The constructor the error was created with. Defaults to `name`.
    #[serde(default)]
    pub proto: String,
    /// Error kind, e.g. `TypeError` or `DenopsTestError`.
    pub name: String,
    pub message: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_string"
    )]
    pub stack: Option<String>,
    /// Extra own properties of the original error.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl ErrorObject {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            proto: name.clone(),
            name,
            message: message.into(),
            stack: None,
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Capture any Rust error.
    ///
    /// `name` is the error's type name, `message` its `Display` output, and
    /// `stack` lists the `source()` chain when there is one.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let name = short_type_name::<E>();
        let message = err.to_string();

        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("Caused by: {}", cause));
            source = cause.source();
        }

        let stack = (!causes.is_empty())
            .then(|| format!("{}: {}\n{}", name, message, causes.join("\n")));

        Self {
            proto: name.clone(),
            name,
            message,
            stack,
            attributes: Map::new(),
        }
    }
}

impl std::fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl std::error::Error for ErrorObject {}

/// Only called when the field is present, so `null` is rejected rather than
/// read as `None`.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// Last path segment of a type name, without generics. Trait objects have no
/// concrete name and become `Error`.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    if full.starts_with("dyn ") {
        return "Error".to_string();
    }
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
