//! Crate-level error type.
//!
//! Every fallible operation in this crate returns [`Result`]. Argument problems
//! surface as [`Error::InvalidArgument`]; rejected reporting data surfaces as
//! [`Error::InvalidSentryData`], which carries a [`KindSentryError`] whose own
//! [`SentryData`](crate::sentry::SentryData) itemizes what was wrong, so the
//! failure can be reported like any other error.

use core::fmt::{self, Display};

use crate::sentry::KindSentryError;
use crate::types::{AnyError, Errors, KindError};

/// `true` unless the crate was built with the `unchecked` feature.
///
/// Validation paths test this constant, so unchecked builds drop them entirely.
pub(crate) const CHECKED: bool = cfg!(not(feature = "unchecked"));

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures raised by this crate.
#[derive(Debug, Clone)]
pub enum Error {
    /// A constructor or function argument failed validation.
    InvalidArgument(String),
    /// Reporting data failed normalization.
    InvalidSentryData(Box<KindSentryError>),
    /// The reporting client was registered more than once.
    AlreadyInitialized,
    /// The reporting client was requested before it was registered.
    NotInitialized,
}

impl Error {
    #[inline]
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns the error kind this failure maps onto when reported.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::InvalidArgument(_) => Errors::INVALID_INPUT,
            Self::InvalidSentryData(err) => err.kind(),
            Self::AlreadyInitialized | Self::NotInitialized => Errors::INVALID_USE,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::InvalidSentryData(err) => write!(f, "{}", err.original_message()),
            Self::AlreadyInitialized => f.write_str("Sentry API already initialized"),
            Self::NotInitialized => f.write_str("Sentry API has not been initialized"),
        }
    }
}

impl core::error::Error for Error {}

impl From<Error> for AnyError {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidSentryData(err) => AnyError::Sentry(*err),
            other => AnyError::Kind(KindError::internal(other.to_string(), other.kind(), None)),
        }
    }
}
