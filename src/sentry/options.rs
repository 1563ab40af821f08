use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sentry::normalize::MAX_TAG_KEY_LENGTH;

/// Configuration for collating reporting data from cause chains.
///
/// Deserializes with per-field defaults, so a host can load only the
/// overrides it needs from its own configuration.
///
/// # Examples
///
/// ```
/// use kind_error::sentry::KindErrorDataOptions;
///
/// let options: KindErrorDataOptions =
///     serde_json::from_str(r#"{"kind_tag_name": "error_kind"}"#).unwrap();
///
/// assert_eq!(options.kind_tag_name, "error_kind");
/// assert_eq!(options.group_by_tag_name, "group_by_message");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindErrorDataOptions {
    /// Tag holding the root error's kind.
    pub kind_tag_name: String,
    /// Tag holding the root error's original message, for grouping.
    pub group_by_tag_name: String,
    /// Tag holding the root error's full message.
    pub concatenated_message_tag_name: String,
    /// Prefix for the per-cause contexts; the cause's depth is appended.
    pub causal_error_context_prefix: String,
}

impl Default for KindErrorDataOptions {
    fn default() -> Self {
        Self {
            kind_tag_name: "kind".into(),
            group_by_tag_name: "group_by_message".into(),
            concatenated_message_tag_name: "concatenated_message".into(),
            causal_error_context_prefix: "Source Error - ".into(),
        }
    }
}

impl KindErrorDataOptions {
    #[must_use]
    pub fn kind_tag_name(mut self, name: impl Into<String>) -> Self {
        self.kind_tag_name = name.into();
        self
    }

    #[must_use]
    pub fn group_by_tag_name(mut self, name: impl Into<String>) -> Self {
        self.group_by_tag_name = name.into();
        self
    }

    #[must_use]
    pub fn concatenated_message_tag_name(mut self, name: impl Into<String>) -> Self {
        self.concatenated_message_tag_name = name.into();
        self
    }

    #[must_use]
    pub fn causal_error_context_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.causal_error_context_prefix = prefix.into();
        self
    }

    /// Checks that every configured tag name is a usable tag key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming each tag name that is empty or
    /// longer than [`MAX_TAG_KEY_LENGTH`] characters.
    pub fn validate(&self) -> Result<()> {
        let invalid: Vec<&str> = self
            .reserved_tag_names()
            .into_iter()
            .filter(|name| {
                let length = name.chars().count();
                length == 0 || length > MAX_TAG_KEY_LENGTH
            })
            .collect();
        if invalid.is_empty() {
            return Ok(());
        }
        Err(Error::invalid_argument(format!(
            "tag names must be 1 to {MAX_TAG_KEY_LENGTH} characters, got {invalid:?}"
        )))
    }

    /// Tag names the collation fills in itself and user data may not use.
    #[must_use]
    pub fn reserved_tag_names(&self) -> [&str; 3] {
        [
            &self.kind_tag_name,
            &self.group_by_tag_name,
            &self.concatenated_message_tag_name,
        ]
    }
}
