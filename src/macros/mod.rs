//! Shorthand for building kinded errors.
//!
//! - [`macro@crate::kind_error`] - Formats a message and builds a
//!   [`KindError`](crate::KindError) of the given kind with default options.
//!
//! # Examples
//!
//! ```
//! use kind_error::{kind_error, Errors};
//!
//! let user_id = 42;
//! let err = kind_error!(Errors::NOT_FOUND, "user {} does not exist", user_id).unwrap();
//! assert_eq!(err.message(), "user 42 does not exist");
//! assert_eq!(err.kind(), "NotFound");
//! ```

/// Builds a [`KindError`](crate::KindError) from a kind and a format string.
///
/// Expands to [`KindError::new`](crate::KindError::new) with default options,
/// so the result is a [`Result`](crate::Result).
///
/// # Examples
///
/// ```
/// use kind_error::kind_error;
///
/// let err = kind_error!("Timeout", "gave up after {}ms", 250).unwrap();
/// assert_eq!(err.name(), "TimeoutError");
/// ```
#[macro_export]
macro_rules! kind_error {
    ($kind:expr, $($arg:tt)+) => {
        $crate::KindError::new(format!($($arg)+), $kind, $crate::KindErrorOptions::default())
    };
}
