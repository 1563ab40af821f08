//! Normalized error snapshots and cause combination.
//!
//! [`ErrorInfo`] is the common currency between error values: whatever the
//! error's origin, its name, message and stack frames are reduced to one shape
//! that can be compared, combined and rendered.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, CHECKED};
use crate::types::stack_trace::{combine_stacks, strip_frames};
use crate::types::AnyError;

/// Stand-in used wherever a message would otherwise be blank.
pub const EMPTY_MESSAGE: &str = "(empty message)";

/// Immutable, normalized view of an error.
///
/// `stack` never contains the leading `"{name}: {message}"` line that raw
/// stack text usually starts with; [`standardized_stack`](Self::standardized_stack)
/// puts it back in a fixed format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorInfo {
    name: String,
    message: String,
    stack: Vec<String>,
}

impl ErrorInfo {
    /// Creates an info from already-normalized parts.
    ///
    /// A blank message is replaced by [`EMPTY_MESSAGE`].
    pub fn new<N, M, I, F>(name: N, message: M, stack: I) -> Self
    where
        N: Into<String>,
        M: AsRef<str>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let message = message.as_ref();
        let message = if message.trim().is_empty() { EMPTY_MESSAGE } else { message };
        Self {
            name: name.into(),
            message: message.to_string(),
            stack: stack.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalizes `error`, dropping up to `strip_frames` leading frames as long
    /// as at least `minimum_frame_count` frames remain.
    #[must_use]
    pub fn normalize(error: &AnyError, strip_frames: usize, minimum_frame_count: usize) -> Self {
        Self::from_frames(
            error.name(),
            error.message(),
            error.stack_frames(),
            strip_frames,
            minimum_frame_count,
        )
    }

    /// Normalizes `error` without stripping any frames.
    ///
    /// Used for causes: only the error under construction has construction-site
    /// frames worth removing.
    #[must_use]
    pub fn from_error(error: &AnyError) -> Self {
        Self::normalize(error, 0, 0)
    }

    pub(crate) fn from_frames(
        name: &str,
        message: &str,
        frames: Vec<String>,
        strip: usize,
        minimum: usize,
    ) -> Self {
        Self::new(name, message, strip_frames(frames, strip, minimum))
    }

    /// Combines `consequence` with the `cause` that produced it.
    ///
    /// The message gains a `caused by` section naming the cause; the stack is
    /// deduplicated so frames shared by both appear once, at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when both arguments are the same value
    /// (checked builds only).
    ///
    /// # Examples
    ///
    /// ```
    /// use kind_error::ErrorInfo;
    ///
    /// let consequence = ErrorInfo::new("LoadError", "could not load", ["at load", "at main"]);
    /// let cause = ErrorInfo::new("Error", "disk full", ["at write", "at main"]);
    /// let combined = ErrorInfo::from_consequence_and_cause(&consequence, &cause).unwrap();
    ///
    /// assert_eq!(combined.message(), "could not load\n\tcaused by\n\t\tError: disk full");
    /// assert_eq!(combined.stack(), ["at load", "at write", "at main"]);
    /// ```
    pub fn from_consequence_and_cause(consequence: &ErrorInfo, cause: &ErrorInfo) -> Result<Self> {
        if CHECKED && core::ptr::eq(consequence, cause) {
            return Err(Error::invalid_argument("cause and consequence must be different"));
        }

        Ok(Self::combine(consequence, cause))
    }

    pub(crate) fn combine(consequence: &ErrorInfo, cause: &ErrorInfo) -> Self {
        let cause_summary = format!("{}: {}", cause.name, cause.message);
        Self {
            name: consequence.name.clone(),
            message: build_caused_by_message(&consequence.message, Some(&cause_summary)),
            stack: combine_stacks(&consequence.stack, &cause.stack),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stack frames, innermost first, without the summary line.
    #[inline]
    #[must_use]
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// Renders `"{name}: {message}"` followed by one tab-indented line per frame.
    #[must_use]
    pub fn standardized_stack(&self) -> String {
        let capacity = self.stack.iter().map(|frame| frame.len() + 2).sum::<usize>()
            + self.name.len()
            + self.message.len()
            + 2;
        let mut out = String::with_capacity(capacity);
        out.push_str(&self.name);
        out.push_str(": ");
        out.push_str(&self.message);
        for frame in &self.stack {
            out.push_str("\n\t");
            out.push_str(frame);
        }
        out
    }

    pub(crate) fn into_stack(self) -> Vec<String> {
        self.stack
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Appends a `caused by` section to `consequence`.
///
/// Without a cause the consequence is returned as-is. A blank consequence is
/// replaced by [`EMPTY_MESSAGE`] either way.
///
/// # Examples
///
/// ```
/// use kind_error::build_caused_by_message;
///
/// assert_eq!(build_caused_by_message("outer", Some("Error: inner")), "outer\n\tcaused by\n\t\tError: inner");
/// assert_eq!(build_caused_by_message("outer", None), "outer");
/// assert_eq!(build_caused_by_message("  ", None), "(empty message)");
/// ```
#[must_use]
pub fn build_caused_by_message(consequence: &str, cause: Option<&str>) -> String {
    let consequence = if consequence.trim().is_empty() { EMPTY_MESSAGE } else { consequence };
    match cause {
        Some(cause) => format!("{consequence}\n\tcaused by\n\t\t{cause}"),
        None => consequence.to_string(),
    }
}
