//! Sentry data validation and normalization.
//!
//! Validation collects every problem before failing, so one report describes
//! everything wrong with the data. Checked builds only; truncation of tag
//! values always applies.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{Error, Result, CHECKED};
use crate::sentry::{KindErrorDataOptions, KindSentryError, SentryData};
use crate::types::Errors;

/// Longest tag key Sentry accepts, in characters.
pub const MAX_TAG_KEY_LENGTH: usize = 32;
/// Longest tag value kept, in characters; longer values are cut.
pub const MAX_TAG_VALUE_LENGTH: usize = 200;
/// Properties a context may not define at its top level.
pub const RESERVED_CONTEXT_PROPERTIES: &[&str] = &["type"];
/// Name of the context describing rejected data.
pub const INVALID_SENTRY_DATA_CONTEXT: &str = "Invalid Sentry Data";

/// Validates `data` and truncates its tag values.
///
/// # Errors
///
/// Returns [`Error::InvalidSentryData`] when any tag key is empty or longer than
/// [`MAX_TAG_KEY_LENGTH`], uses a reserved tag name, or when any context
/// defines a [`RESERVED_CONTEXT_PROPERTIES`] entry. The carried error's own data
/// holds an [`INVALID_SENTRY_DATA_CONTEXT`] context listing each violation.
///
/// # Examples
///
/// ```
/// use kind_error::sentry::{normalize_sentry_data, KindErrorDataOptions, SentryData};
///
/// let data = SentryData::default().with_tag("note", "x".repeat(500));
/// let normalized = normalize_sentry_data(&KindErrorDataOptions::default(), data).unwrap();
/// assert_eq!(normalized.tags["note"].len(), 200);
/// ```
pub fn normalize_sentry_data(options: &KindErrorDataOptions, data: SentryData) -> Result<SentryData> {
    if CHECKED {
        let violations = Violations::collect(options, &data);
        if !violations.is_empty() {
            tracing::debug!(
                invalid = violations.invalid.len(),
                reserved = violations.reserved.len(),
                contexts = violations.contexts_with_reserved_properties.len(),
                "rejecting invalid sentry data"
            );
            return Err(violations.into_error());
        }
    }

    let SentryData { mut tags, contexts, fingerprint } = data;
    for value in tags.values_mut() {
        truncate_tag_value(value);
    }
    Ok(SentryData { tags, contexts, fingerprint })
}

/// Cuts `value` to at most [`MAX_TAG_VALUE_LENGTH`] characters.
pub(crate) fn truncate_tag_value(value: &mut String) {
    if let Some((index, _)) = value.char_indices().nth(MAX_TAG_VALUE_LENGTH) {
        value.truncate(index);
    }
}

#[derive(Debug, Default)]
struct Violations {
    invalid: Vec<String>,
    reserved: Vec<String>,
    contexts_with_reserved_properties: BTreeMap<String, Vec<String>>,
}

impl Violations {
    fn collect(options: &KindErrorDataOptions, data: &SentryData) -> Self {
        let reserved_names = options.reserved_tag_names();
        let mut violations = Self::default();

        for key in data.tags.keys() {
            let length = key.chars().count();
            if length == 0 || length > MAX_TAG_KEY_LENGTH {
                violations.invalid.push(key.clone());
            }
            if reserved_names.contains(&key.as_str()) {
                violations.reserved.push(key.clone());
            }
        }

        for (name, context) in &data.contexts {
            let reserved: Vec<String> = RESERVED_CONTEXT_PROPERTIES
                .iter()
                .filter(|property| context.contains_key(**property))
                .map(|property| property.to_string())
                .collect();
            if !reserved.is_empty() {
                violations.contexts_with_reserved_properties.insert(name.clone(), reserved);
            }
        }

        violations
    }

    fn is_empty(&self) -> bool {
        self.invalid.is_empty()
            && self.reserved.is_empty()
            && self.contexts_with_reserved_properties.is_empty()
    }

    fn into_error(self) -> Error {
        let mut details = Map::new();
        details.insert("invalid".into(), strings(self.invalid));
        details.insert("reserved".into(), strings(self.reserved));
        details.insert(
            "contexts_with_reserved_properties".into(),
            Value::Object(
                self.contexts_with_reserved_properties
                    .into_iter()
                    .map(|(name, properties)| (name, strings(properties)))
                    .collect(),
            ),
        );

        let mut sentry_data = SentryData::default();
        sentry_data.contexts.insert(INVALID_SENTRY_DATA_CONTEXT.to_string(), details);
        Error::InvalidSentryData(Box::new(KindSentryError::internal(
            "Invalid Sentry data",
            Errors::INVALID_INPUT,
            sentry_data,
        )))
    }
}

fn strings(values: Vec<String>) -> Value {
    Value::Array(values.into_iter().map(Value::String).collect())
}
