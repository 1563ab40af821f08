//! The union of every error shape a cause chain can hold.

use core::fmt;

use crate::sentry::{KindSentryError, SentryData};
use crate::types::error_info::ErrorInfo;
use crate::types::stack_trace::frames_from_stack_text;
use crate::types::{KindError, PlainError};

/// Any error that can appear in a cause chain.
///
/// Capabilities are checked explicitly: [`as_kind_error`](Self::as_kind_error)
/// for kinded errors, [`sentry_data`](Self::sentry_data) for errors carrying
/// reporting data.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyError {
    Plain(PlainError),
    Kind(KindError),
    Sentry(KindSentryError),
}

impl AnyError {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(err) => err.name(),
            Self::Kind(err) => err.name(),
            Self::Sentry(err) => err.name(),
        }
    }

    /// The full message, including any `caused by` sections.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Plain(err) => err.message(),
            Self::Kind(err) => err.message(),
            Self::Sentry(err) => err.message(),
        }
    }

    /// The message as given at construction; plain errors only have the one.
    #[must_use]
    pub fn original_message(&self) -> &str {
        match self.as_kind_error() {
            Some(err) => err.original_message(),
            None => self.message(),
        }
    }

    /// This error's own standardized stack, without any cause frames.
    #[must_use]
    pub fn original_stack(&self) -> String {
        match self.as_kind_error() {
            Some(err) => err.original_stack().to_string(),
            None => ErrorInfo::from_error(self).standardized_stack(),
        }
    }

    #[must_use]
    pub fn cause(&self) -> Option<&AnyError> {
        match self {
            Self::Plain(err) => err.cause(),
            Self::Kind(err) => err.cause(),
            Self::Sentry(err) => err.cause(),
        }
    }

    /// Returns the kinded view of this error, if it has one.
    #[must_use]
    pub fn as_kind_error(&self) -> Option<&KindError> {
        match self {
            Self::Plain(_) => None,
            Self::Kind(err) => Some(err),
            Self::Sentry(err) => Some(err.as_kind_error()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.as_kind_error().map(KindError::kind)
    }

    #[must_use]
    pub fn has_sentry_data(&self) -> bool {
        matches!(self, Self::Sentry(_))
    }

    /// Reporting data attached to this error, if any.
    #[must_use]
    pub fn sentry_data(&self) -> Option<&SentryData> {
        match self {
            Self::Sentry(err) => Some(err.sentry_data()),
            _ => None,
        }
    }

    /// Frames of the error's current stack, without the summary line.
    pub(crate) fn stack_frames(&self) -> Vec<String> {
        match self {
            Self::Plain(err) => err
                .stack()
                .map(|stack| frames_from_stack_text(stack, &err.to_string()))
                .unwrap_or_default(),
            Self::Kind(err) => err.stack_frames().to_vec(),
            Self::Sentry(err) => err.stack_frames().to_vec(),
        }
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(err) => fmt::Display::fmt(err, f),
            Self::Kind(err) => fmt::Display::fmt(err, f),
            Self::Sentry(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for AnyError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl From<PlainError> for AnyError {
    #[inline]
    fn from(error: PlainError) -> Self {
        Self::Plain(error)
    }
}

impl From<KindError> for AnyError {
    #[inline]
    fn from(error: KindError) -> Self {
        Self::Kind(error)
    }
}

impl From<KindSentryError> for AnyError {
    #[inline]
    fn from(error: KindSentryError) -> Self {
        Self::Sentry(error)
    }
}
