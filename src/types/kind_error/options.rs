use serde_json::Value;

use crate::types::metadata::{clone_metadata, Metadata};
use crate::types::AnyError;

/// Optional construction parameters for [`KindError`](super::KindError).
///
/// # Examples
///
/// ```
/// use kind_error::{Errors, KindError, KindErrorOptions, PlainError};
/// use serde_json::json;
///
/// let options = KindErrorOptions::default()
///     .prefix("Billing")
///     .metadata(&json!({"invoice": 42}))
///     .cause(PlainError::new("card declined"))
///     .composite_stack(true);
///
/// let err = KindError::new("payment failed", Errors::NOT_ALLOWED, options).unwrap();
/// assert_eq!(err.name(), "BillingNotAllowedError");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KindErrorOptions {
    pub(crate) name: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) metadata: Option<Metadata>,
    pub(crate) cause: Option<AnyError>,
    pub(crate) strip_stack_frames: usize,
    pub(crate) minimum_frame_count: usize,
    pub(crate) composite_stack: bool,
    pub(crate) stack_frames: Option<Vec<String>>,
}

impl KindErrorOptions {
    /// Uses `name` instead of the kind when building the error name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Prepends `prefix` to the error name.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Attaches a private copy of `metadata`.
    #[must_use]
    pub fn metadata(mut self, metadata: &Value) -> Self {
        self.metadata = clone_metadata(Some(metadata));
        self
    }

    #[must_use]
    pub fn cause(mut self, cause: impl Into<AnyError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Number of leading frames to drop from the captured stack (default: 0).
    #[must_use]
    pub fn strip_stack_frames(mut self, count: usize) -> Self {
        self.strip_stack_frames = count;
        self
    }

    /// Frame stripping never leaves fewer than this many frames (default: 0).
    #[must_use]
    pub fn minimum_frame_count(mut self, count: usize) -> Self {
        self.minimum_frame_count = count;
        self
    }

    /// Whether `stack` should include the cause's frames (default: false).
    #[must_use]
    pub fn composite_stack(mut self, composite: bool) -> Self {
        self.composite_stack = composite;
        self
    }

    /// Uses the given frames instead of capturing the current stack.
    ///
    /// Handy when re-raising errors recorded elsewhere.
    #[must_use]
    pub fn stack_frames<I, F>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.stack_frames = Some(frames.into_iter().map(Into::into).collect());
        self
    }
}
