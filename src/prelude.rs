//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use kind_error::prelude::*;
//!
//! fn load(id: u32) -> Result<(), KindError> {
//!     Err(KindError::new(
//!         format!("record {id} missing"),
//!         Errors::NOT_FOUND,
//!         KindErrorOptions::default().cause(PlainError::new("no rows")),
//!     )
//!     .expect("valid kind"))
//! }
//!
//! let err: AnyError = load(1).unwrap_err().into();
//! let data = collate_sentry_data(&KindErrorDataOptions::default(), &err).unwrap();
//! assert_eq!(data.tags["kind"], "NotFound");
//! ```

// Macros
pub use crate::kind_error;

// Core types
pub use crate::sentry::{
    collate_sentry_data, KindErrorData, KindErrorDataOptions, KindSentryError, SentryData,
};
pub use crate::types::{AnyError, ErrorInfo, Errors, KindError, KindErrorOptions, PlainError};

// Traits
pub use crate::traits::{errors_from_error, CauseChain, Order};
