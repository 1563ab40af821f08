//! Error value types.
//!
//! This module provides the error shapes a cause chain is built from and the
//! normalized [`ErrorInfo`] view used to combine them.
//!
//! # Examples
//!
//! ```
//! use kind_error::{AnyError, Errors, KindError, KindErrorOptions, PlainError};
//!
//! let err: AnyError = KindError::new(
//!     "could not load profile",
//!     Errors::NOT_FOUND,
//!     KindErrorOptions::default().cause(PlainError::new("no rows")),
//! )
//! .unwrap()
//! .into();
//!
//! assert_eq!(err.kind(), Some("NotFound"));
//! assert_eq!(err.cause().map(|c| c.message()), Some("no rows"));
//! ```
use smallvec::SmallVec;

pub mod any_error;
pub mod error_info;
pub mod kind_error;
pub mod kinds;
pub mod metadata;
pub mod plain_error;
pub mod stack_trace;

pub use any_error::AnyError;
pub use error_info::{build_caused_by_message, ErrorInfo, EMPTY_MESSAGE};
pub use kind_error::{KindError, KindErrorOptions};
pub use kinds::Errors;
pub use metadata::{clone_metadata, Metadata};
pub use plain_error::PlainError;

/// SmallVec-backed collection used when walking cause chains.
///
/// Most chains are short, so a few entries are kept inline.
pub type ErrorVec<E> = SmallVec<[E; 4]>;
