//! Read-only metadata attached to errors.

use core::fmt;
use core::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-supplied metadata, owned exclusively by the error it is attached to.
///
/// Only shared access is exposed, so once constructed the value can never change,
/// and it is independent of whatever value it was cloned from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Value);

impl Metadata {
    /// Returns the underlying JSON value.
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Looks up a top-level field when the metadata is an object.
    #[inline]
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl Deref for Metadata {
    type Target = Value;

    #[inline]
    fn deref(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Metadata {
    #[inline]
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Deep-copies `value` into a read-only [`Metadata`].
///
/// `None` passes through. Every nested object and array is copied, so later
/// changes to `value` are never observed through the clone.
///
/// # Examples
///
/// ```
/// use kind_error::clone_metadata;
/// use serde_json::json;
///
/// let mut source = json!({"user": {"roles": ["admin"]}});
/// let cloned = clone_metadata(Some(&source)).unwrap();
///
/// source["user"]["roles"][0] = json!("guest");
/// assert_eq!(cloned["user"]["roles"][0], "admin");
/// ```
#[must_use]
pub fn clone_metadata(value: Option<&Value>) -> Option<Metadata> {
    value.cloned().map(Metadata)
}
