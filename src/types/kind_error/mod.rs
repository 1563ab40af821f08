//! Kinded error type with cause chaining.
//!
//! A [`KindError`] is classified by a short `kind` token, carries optional
//! metadata, and may wrap the error that caused it. When a cause is present
//! the message always gains a `caused by` section; the stack only includes the
//! cause's frames when a composite stack is requested.

use crate::error::{Error, Result, CHECKED};
use crate::types::error_info::ErrorInfo;
use crate::types::metadata::Metadata;
use crate::types::stack_trace::capture_frames;
use crate::types::{AnyError, Errors};

mod options;
mod traits;

pub use options::KindErrorOptions;

/// An error with a kind, an optional cause and immutable metadata.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct KindError {
    pub(crate) kind: String,
    pub(crate) name: String,
    pub(crate) message: String,
    pub(crate) original_message: String,
    pub(crate) stack: String,
    pub(crate) original_stack: String,
    pub(crate) stack_frames: Vec<String>,
    pub(crate) metadata: Option<Metadata>,
    pub(crate) cause: Option<Box<AnyError>>,
}

impl KindError {
    /// Creates a new error of the given kind.
    ///
    /// The name is `"{prefix}{name or kind}Error"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the kind is empty, or when the
    /// kind, name or prefix contain whitespace (checked builds only).
    ///
    /// # Examples
    ///
    /// ```
    /// use kind_error::{Errors, KindError, KindErrorOptions, PlainError};
    ///
    /// let cause = KindError::new(
    ///     "CAUSE",
    ///     "CauseKind",
    ///     KindErrorOptions::default().cause(PlainError::new("LEAF")),
    /// )
    /// .unwrap();
    /// let err = KindError::new("ROOT", "RootKind", KindErrorOptions::default().cause(cause)).unwrap();
    ///
    /// assert_eq!(
    ///     err.message(),
    ///     "ROOT\n\tcaused by\n\t\tCauseKindError: CAUSE\n\tcaused by\n\t\tError: LEAF"
    /// );
    /// assert_eq!(err.original_message(), "ROOT");
    /// ```
    pub fn new(
        message: impl Into<String>,
        kind: impl Into<String>,
        options: KindErrorOptions,
    ) -> Result<Self> {
        let kind = kind.into();
        if CHECKED {
            if kind.is_empty() {
                return Err(Error::invalid_argument("kind must not be empty"));
            }
            validate_token("kind", &kind)?;
            if let Some(name) = &options.name {
                validate_token("name", name)?;
            }
            if let Some(prefix) = &options.prefix {
                validate_token("prefix", prefix)?;
            }
        }
        Ok(Self::build(message.into(), kind, options))
    }

    /// Creates an error of kind [`Errors::UNKNOWN`] with default options.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::build(message.into(), Errors::UNKNOWN.to_string(), KindErrorOptions::default())
    }

    /// Builds an error from arguments the crate already knows to be valid.
    pub(crate) fn internal(
        message: impl Into<String>,
        kind: impl Into<String>,
        cause: Option<AnyError>,
    ) -> Self {
        let options = KindErrorOptions { cause, ..KindErrorOptions::default() };
        Self::build(message.into(), kind.into(), options)
    }

    fn build(message: String, kind: String, options: KindErrorOptions) -> Self {
        let KindErrorOptions {
            name,
            prefix,
            metadata,
            cause,
            strip_stack_frames,
            minimum_frame_count,
            composite_stack,
            stack_frames,
        } = options;

        let name = format!(
            "{}{}Error",
            prefix.as_deref().unwrap_or_default(),
            name.as_deref().unwrap_or(&kind)
        );

        let info = ErrorInfo::from_frames(
            &name,
            &message,
            stack_frames.unwrap_or_else(capture_frames),
            strip_stack_frames,
            minimum_frame_count,
        );
        let original_stack = info.standardized_stack();

        let (combined_message, stack, stack_frames) = match &cause {
            None => (message.clone(), original_stack.clone(), info.into_stack()),
            Some(cause) => {
                let combined = ErrorInfo::combine(&info, &ErrorInfo::from_error(cause));
                if composite_stack {
                    (combined.message().to_string(), combined.standardized_stack(), combined.into_stack())
                } else {
                    (combined.message().to_string(), original_stack.clone(), info.into_stack())
                }
            }
        };

        Self {
            kind,
            name,
            message: combined_message,
            original_message: message,
            stack,
            original_stack,
            stack_frames,
            metadata,
            cause: cause.map(Box::new),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message, including `caused by` sections when there is a cause.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message exactly as given at construction.
    #[inline]
    #[must_use]
    pub fn original_message(&self) -> &str {
        &self.original_message
    }

    /// The standardized stack, combined with the cause's when requested.
    #[inline]
    #[must_use]
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// The standardized stack of this error alone.
    #[inline]
    #[must_use]
    pub fn original_stack(&self) -> &str {
        &self.original_stack
    }

    /// The frames rendered in [`stack`](Self::stack).
    #[inline]
    #[must_use]
    pub fn stack_frames(&self) -> &[String] {
        &self.stack_frames
    }

    #[inline]
    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&AnyError> {
        self.cause.as_deref()
    }
}

fn validate_token(what: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_whitespace) {
        return Err(Error::invalid_argument(format!(
            "{what} must not contain whitespace, got {value:?}"
        )));
    }
    Ok(())
}
