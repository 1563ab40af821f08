//! The reporting-service seam and the integration that feeds it.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::sentry::{collate_sentry_data, KindErrorDataOptions, SentryContext, SentryData};
use crate::types::AnyError;

/// Per-report scope of a reporting service.
pub trait SentryScope {
    fn set_tags(&mut self, tags: &BTreeMap<String, String>);
    fn set_context(&mut self, name: &str, context: &SentryContext);
    fn set_fingerprint(&mut self, fingerprint: &[String]);
}

/// A reporting service client.
///
/// Implementations wrap whatever SDK the host uses; this crate only configures
/// a scope and then asks for the error to be captured.
pub trait SentryClient: Send + Sync {
    /// Runs `configure` against the scope the next capture will use.
    fn configure_scope(&self, configure: &mut dyn FnMut(&mut dyn SentryScope));

    fn capture_exception(&self, error: &AnyError);
}

/// Attaches collated cause-chain data to outgoing reports.
///
/// # Examples
///
/// ```
/// use kind_error::sentry::{KindErrorData, KindErrorDataOptions, SentryData};
/// use kind_error::{AnyError, KindError};
///
/// let integration = KindErrorData::new(KindErrorDataOptions::default());
/// let error: AnyError = KindError::unknown("boom").into();
///
/// let event = integration
///     .process_event(SentryData::default().with_tag("release", "1.2.3"), Some(&error))
///     .unwrap();
/// assert_eq!(event.tags["release"], "1.2.3");
/// assert_eq!(event.tags["kind"], "Unknown");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KindErrorData {
    options: KindErrorDataOptions,
}

impl KindErrorData {
    /// Name under which the integration registers with the service.
    pub const NAME: &'static str = "KindErrorData";

    pub fn new(options: KindErrorDataOptions) -> Self {
        Self { options }
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &KindErrorDataOptions {
        &self.options
    }

    /// Collates the data for `error` with this integration's options.
    ///
    /// # Errors
    ///
    /// See [`collate_sentry_data`].
    pub fn collate(&self, error: &AnyError) -> Result<SentryData> {
        collate_sentry_data(&self.options, error)
    }

    /// Merges the collated data for `error` into an outgoing event.
    ///
    /// Collated tags and contexts overwrite the event's on collision; a
    /// non-empty collated fingerprint replaces the event's. Without an error
    /// the event is returned unchanged.
    ///
    /// # Errors
    ///
    /// See [`collate_sentry_data`].
    pub fn process_event(&self, mut event: SentryData, error: Option<&AnyError>) -> Result<SentryData> {
        let Some(error) = error else {
            return Ok(event);
        };

        let collated = self.collate(error)?;
        event.tags.extend(collated.tags);
        event.contexts.extend(collated.contexts);
        if !collated.fingerprint.is_empty() {
            event.fingerprint = collated.fingerprint;
        }
        Ok(event)
    }

    /// Reports `error` through `client` with its collated data applied.
    ///
    /// When the error's data is rejected the error is still captured, without
    /// data, followed by the rejection itself so the bad data can be fixed.
    ///
    /// # Errors
    ///
    /// Returns the rejection after both captures.
    pub fn report(&self, client: &dyn SentryClient, error: &AnyError) -> Result<()> {
        match self.collate(error) {
            Ok(data) => {
                client.configure_scope(&mut |scope: &mut dyn SentryScope| data.apply_to_scope(scope));
                client.capture_exception(error);
                Ok(())
            }
            Err(rejection) => {
                tracing::warn!(error = %rejection, "reporting without sentry data");
                client.capture_exception(error);

                let rejected = AnyError::from(rejection.clone());
                if let Ok(data) = self.collate(&rejected) {
                    client.configure_scope(&mut |scope: &mut dyn SentryScope| data.apply_to_scope(scope));
                }
                client.capture_exception(&rejected);
                Err(rejection)
            }
        }
    }
}
