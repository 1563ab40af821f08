//! Kinded, causally chained errors and Sentry data collation.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `kind_error::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Kinded Error with a Cause
//!
//! ```
//! use kind_error::{Errors, KindError, KindErrorOptions, PlainError};
//!
//! let err = KindError::new(
//!     "could not save draft",
//!     Errors::TRANSIENT_SERVICE,
//!     KindErrorOptions::default().cause(PlainError::new("connection reset")),
//! )
//! .unwrap();
//!
//! assert_eq!(err.name(), "TransientServiceError");
//! assert_eq!(err.message(), "could not save draft\n\tcaused by\n\t\tError: connection reset");
//! assert_eq!(err.original_message(), "could not save draft");
//! ```
//!
//! ## Walking a Cause Chain
//!
//! ```
//! use kind_error::traits::{errors_from_error, Order};
//! use kind_error::{AnyError, KindError, KindErrorOptions, PlainError};
//!
//! let err: AnyError = KindError::new("outer", "Outer", KindErrorOptions::default().cause(PlainError::new("inner")))
//!     .unwrap()
//!     .into();
//!
//! let names: Vec<_> = errors_from_error(Some(&err), Order::ConsequenceFirst).map(|e| e.name()).collect();
//! assert_eq!(names, ["OuterError", "Error"]);
//! ```
//!
//! ## Collating Sentry Data
//!
//! ```
//! use kind_error::sentry::{collate_sentry_data, KindErrorDataOptions, KindSentryError, SentryData};
//! use kind_error::{AnyError, Errors, KindErrorOptions};
//!
//! let err: AnyError = KindSentryError::new(
//!     "payment declined",
//!     Errors::NOT_ALLOWED,
//!     KindErrorOptions::default(),
//!     SentryData::default().with_fingerprint(["payments"]),
//! )
//! .unwrap()
//! .into();
//!
//! let data = collate_sentry_data(&KindErrorDataOptions::default(), &err).unwrap();
//! assert_eq!(data.fingerprint, ["payments"]);
//! assert_eq!(data.tags["concatenated_message"], "payment declined");
//! ```

/// Crate error type and result alias
pub mod error;
/// Error-level logging with kinded metadata
pub mod logging;
/// Shorthand macros for building errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Sentry data attachment, collation and reporting
pub mod sentry;
/// Cause chain traversal
pub mod traits;
/// Error value types
pub mod types;

pub use error::{Error, Result};
pub use types::{
    build_caused_by_message, clone_metadata, AnyError, ErrorInfo, Errors, KindError,
    KindErrorOptions, Metadata, PlainError,
};
