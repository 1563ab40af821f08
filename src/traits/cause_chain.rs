//! Walking cause chains.
//!
//! Any type that can name the error it was caused by implements [`CauseChain`];
//! [`errors_from_error`] then yields the whole chain in either direction.
//!
//! # Examples
//!
//! ```
//! use kind_error::traits::{errors_from_error, Order};
//! use kind_error::{AnyError, PlainError};
//!
//! let root: AnyError = PlainError::new("root")
//!     .with_cause(PlainError::new("middle").with_cause(PlainError::new("leaf")))
//!     .into();
//!
//! let messages: Vec<_> = errors_from_error(Some(&root), Order::CauseFirst)
//!     .map(|err| err.message())
//!     .collect();
//! assert_eq!(messages, ["leaf", "middle", "root"]);
//! ```

use core::iter::FusedIterator;
use core::str::FromStr;

use crate::error::Error;
use crate::types::{AnyError, ErrorVec};

/// Types whose values may have been caused by another value of the same type.
pub trait CauseChain {
    /// Returns the direct cause, if any.
    fn cause(&self) -> Option<&Self>;
}

impl CauseChain for AnyError {
    #[inline]
    fn cause(&self) -> Option<&Self> {
        AnyError::cause(self)
    }
}

impl CauseChain for dyn core::error::Error + 'static {
    #[inline]
    fn cause(&self) -> Option<&Self> {
        self.source()
    }
}

/// Direction in which a cause chain is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Root first, then its cause, then the cause's cause.
    #[default]
    ConsequenceFirst,
    /// The innermost cause first, the root last.
    CauseFirst,
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ConsequenceFirst" => Ok(Self::ConsequenceFirst),
            "CauseFirst" => Ok(Self::CauseFirst),
            other => Err(Error::invalid_argument(format!("unrecognized order: {other:?}"))),
        }
    }
}

/// Iterator returned by [`errors_from_error`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ErrorsFromError<'a, E: ?Sized> {
    inner: Walk<'a, E>,
}

enum Walk<'a, E: ?Sized> {
    Forward(Option<&'a E>),
    Backward(smallvec::IntoIter<[&'a E; 4]>),
}

/// Yields `root` and every transitive cause in the requested order.
///
/// A `None` root yields nothing. [`Order::ConsequenceFirst`] follows causes
/// lazily; [`Order::CauseFirst`] has to reach the innermost cause before it can
/// yield anything, so it collects the chain first.
pub fn errors_from_error<E>(root: Option<&E>, order: Order) -> ErrorsFromError<'_, E>
where
    E: CauseChain + ?Sized,
{
    let inner = match order {
        Order::ConsequenceFirst => Walk::Forward(root),
        Order::CauseFirst => {
            let mut chain: ErrorVec<&E> = ErrorVec::new();
            let mut current = root;
            while let Some(error) = current {
                chain.push(error);
                current = error.cause();
            }
            Walk::Backward(chain.into_iter())
        }
    };
    ErrorsFromError { inner }
}

impl<'a, E> Iterator for ErrorsFromError<'a, E>
where
    E: CauseChain + ?Sized,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        match &mut self.inner {
            Walk::Forward(current) => {
                let error = current.take()?;
                *current = error.cause();
                Some(error)
            }
            Walk::Backward(chain) => chain.next_back(),
        }
    }
}

impl<E> FusedIterator for ErrorsFromError<'_, E> where E: CauseChain + ?Sized {}
