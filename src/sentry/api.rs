//! Process-wide reporting client registration.
//!
//! The client is registered once during startup and read everywhere after.
//! Hosts that prefer explicit wiring can skip this and pass a
//! [`SentryClient`] to [`KindErrorData::report`](super::KindErrorData::report).

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::sentry::SentryClient;

static CLIENT: OnceLock<Box<dyn SentryClient>> = OnceLock::new();

/// Registers the process-wide client.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] if a client was already registered.
pub fn init(client: impl SentryClient + 'static) -> Result<()> {
    CLIENT.set(Box::new(client)).map_err(|_| Error::AlreadyInitialized)?;
    tracing::debug!("sentry client registered");
    Ok(())
}

/// Returns the process-wide client.
///
/// # Errors
///
/// Returns [`Error::NotInitialized`] if [`init`] has not been called.
pub fn get() -> Result<&'static dyn SentryClient> {
    CLIENT.get().map(|client| client.as_ref()).ok_or(Error::NotInitialized)
}
