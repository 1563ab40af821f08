//! Error-level logging through `tracing`.
//!
//! Every error event carries a `kind` field; when the caller's metadata does not
//! name one it defaults to [`Errors::UNKNOWN`], so log queries by kind never miss
//! an event.

use serde_json::{Map, Value};

use crate::types::{AnyError, Errors};

/// Metadata key holding the error kind.
pub const KIND_KEY: &str = "kind";

/// Builds the metadata object logged with an error-level event.
///
/// Object metadata is copied as-is; any other value is kept under a `metadata`
/// key. A missing `kind` defaults to `"Unknown"`.
///
/// # Examples
///
/// ```
/// use kind_error::logging::error_log_metadata;
/// use serde_json::json;
///
/// let metadata = error_log_metadata(Some(&json!({"user": 7})));
/// assert_eq!(metadata["kind"], "Unknown");
/// assert_eq!(metadata["user"], 7);
/// ```
#[must_use]
pub fn error_log_metadata(metadata: Option<&Value>) -> Map<String, Value> {
    let mut fields = match metadata {
        Some(Value::Object(map)) => map.clone(),
        Some(Value::Null) | None => Map::new(),
        Some(other) => {
            let mut map = Map::new();
            map.insert("metadata".into(), other.clone());
            map
        }
    };
    fields
        .entry(KIND_KEY)
        .or_insert_with(|| Value::String(Errors::UNKNOWN.to_string()));
    fields
}

/// Logs `message` at error level with kinded metadata.
pub fn log_error(message: &str, metadata: Option<&Value>) {
    let fields = error_log_metadata(metadata);
    let kind = fields
        .get(KIND_KEY)
        .and_then(Value::as_str)
        .unwrap_or(Errors::UNKNOWN)
        .to_string();
    // Bound outside the macro: `tracing` shadows `Value` inside its expansion.
    let metadata = Value::Object(fields);
    tracing::error!(kind = kind.as_str(), metadata = %metadata, "{message}");
}

/// Logs an error from a cause chain, deriving its metadata from the error.
pub fn log_kind_error(error: &AnyError) {
    log_error(error.message(), Some(&Value::Object(kind_error_log_metadata(error))));
}

/// The metadata [`log_kind_error`] logs for `error`.
#[must_use]
pub fn kind_error_log_metadata(error: &AnyError) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(
        KIND_KEY.into(),
        Value::String(error.kind().unwrap_or(Errors::UNKNOWN).to_string()),
    );
    fields.insert("name".into(), Value::String(error.name().to_string()));
    fields.insert("originalMessage".into(), Value::String(error.original_message().to_string()));
    if let Some(metadata) = error.as_kind_error().and_then(|err| err.metadata()) {
        fields.insert("metadata".into(), metadata.as_value().clone());
    }
    fields
}
