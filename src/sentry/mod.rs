//! Sentry data collation for cause chains.
//!
//! Errors carry reporting data through [`KindSentryError`]. At the reporting
//! boundary [`collate_sentry_data`] walks the chain, merges every error's data
//! with defined precedence, validates the result and adds the root's kind and
//! messages as tags. [`KindErrorData`] hands the result to a [`SentryClient`].

pub mod api;
mod client;
mod collate;
mod kind_sentry_error;
pub mod normalize;
mod options;
mod sentry_data;

pub use client::{KindErrorData, SentryClient, SentryScope};
pub use collate::{collate_sentry_data, sentry_data_reducer};
pub use kind_sentry_error::KindSentryError;
pub use normalize::normalize_sentry_data;
pub use options::KindErrorDataOptions;
pub use sentry_data::{SentryContext, SentryData};
