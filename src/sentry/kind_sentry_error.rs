use core::fmt;
use core::ops::Deref;

use crate::error::Result;
use crate::sentry::SentryData;
use crate::types::{KindError, KindErrorOptions};

/// A [`KindError`] that carries its own reporting data.
///
/// The data is fixed at construction; only shared access is exposed.
///
/// # Examples
///
/// ```
/// use kind_error::sentry::{KindSentryError, SentryData};
/// use kind_error::{Errors, KindErrorOptions};
///
/// let err = KindSentryError::new(
///     "quota exceeded",
///     Errors::NOT_ALLOWED,
///     KindErrorOptions::default(),
///     SentryData::default().with_tag("plan", "free"),
/// )
/// .unwrap();
///
/// assert_eq!(err.kind(), "NotAllowed");
/// assert_eq!(err.sentry_data().tags["plan"], "free");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct KindSentryError {
    error: KindError,
    sentry_data: SentryData,
}

impl KindSentryError {
    /// Creates the error; see [`KindError::new`] for the validation applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an
    /// invalid kind, name or prefix (checked builds only).
    pub fn new(
        message: impl Into<String>,
        kind: impl Into<String>,
        options: KindErrorOptions,
        sentry_data: SentryData,
    ) -> Result<Self> {
        let error = KindError::new(message, kind, options)?;
        Ok(Self { error, sentry_data })
    }

    pub(crate) fn internal(
        message: impl Into<String>,
        kind: impl Into<String>,
        sentry_data: SentryData,
    ) -> Self {
        Self { error: KindError::internal(message, kind, None), sentry_data }
    }

    #[inline]
    #[must_use]
    pub fn sentry_data(&self) -> &SentryData {
        &self.sentry_data
    }

    #[inline]
    #[must_use]
    pub fn as_kind_error(&self) -> &KindError {
        &self.error
    }

    /// Drops the reporting data, keeping the underlying error.
    #[inline]
    pub fn into_kind_error(self) -> KindError {
        self.error
    }
}

impl Deref for KindSentryError {
    type Target = KindError;

    #[inline]
    fn deref(&self) -> &KindError {
        &self.error
    }
}

impl fmt::Display for KindSentryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl core::error::Error for KindSentryError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        core::error::Error::source(&self.error)
    }
}
