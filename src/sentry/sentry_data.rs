use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::sentry::client::SentryScope;

/// A single named Sentry context: an object of arbitrary JSON values.
pub type SentryContext = Map<String, Value>;

/// Structured reporting data: tags, contexts and fingerprint.
///
/// Every field is always present. Deserializing backfills absent fields with
/// empty values.
///
/// # Examples
///
/// ```
/// use kind_error::sentry::SentryData;
/// use serde_json::json;
///
/// let data = SentryData::default()
///     .with_tag("region", "eu-west")
///     .with_context("request", json!({"path": "/users"}))
///     .with_fingerprint(["users", "lookup"]);
///
/// assert_eq!(data.tags["region"], "eu-west");
/// assert_eq!(data.fingerprint, ["users", "lookup"]);
///
/// let partial: SentryData = serde_json::from_value(json!({"tags": {"a": "b"}})).unwrap();
/// assert!(partial.contexts.is_empty() && partial.fingerprint.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentryData {
    pub tags: BTreeMap<String, String>,
    pub contexts: BTreeMap<String, SentryContext>,
    pub fingerprint: Vec<String>,
}

impl SentryData {
    /// Returns `true` when there are no tags, contexts or fingerprint entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.contexts.is_empty() && self.fingerprint.is_empty()
    }

    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Adds a context. Non-object values are stored under a `value` key.
    #[must_use]
    pub fn with_context(mut self, name: impl Into<String>, context: Value) -> Self {
        let context = match context {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        self.contexts.insert(name.into(), context);
        self
    }

    #[must_use]
    pub fn with_fingerprint<I, S>(mut self, fingerprint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fingerprint = fingerprint.into_iter().map(Into::into).collect();
        self
    }

    /// Applies this data to a reporting scope.
    ///
    /// An empty fingerprint is left unset so the service's default grouping applies.
    pub fn apply_to_scope(&self, scope: &mut dyn SentryScope) {
        scope.set_tags(&self.tags);
        for (name, context) in &self.contexts {
            scope.set_context(name, context);
        }
        if !self.fingerprint.is_empty() {
            scope.set_fingerprint(&self.fingerprint);
        }
    }
}
