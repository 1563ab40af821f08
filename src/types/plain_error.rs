//! Errors without a kind.

use core::fmt;

use crate::types::stack_trace::capture_frames;
use crate::types::AnyError;

/// A platform-level error: a name, a message, optional raw stack text and an
/// optional cause.
///
/// This is what foreign errors look like once they enter a cause chain.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainError {
    name: String,
    message: String,
    stack: Option<String>,
    cause: Option<Box<AnyError>>,
}

impl PlainError {
    /// Creates an error named `Error` with no stack.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::named("Error", message)
    }

    /// Creates an error with the given name and no stack.
    #[inline]
    pub fn named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), message: message.into(), stack: None, cause: None }
    }

    /// Creates an error named `Error` whose stack is the caller's current stack.
    ///
    /// The stack text starts with the error's summary line followed by one
    /// indented frame per line.
    pub fn capture(message: impl Into<String>) -> Self {
        let mut error = Self::new(message);
        let mut stack = error.to_string();
        for frame in capture_frames() {
            stack.push_str("\n    ");
            stack.push_str(&frame);
        }
        error.stack = Some(stack);
        error
    }

    /// Converts a standard error, following its `source()` chain into causes.
    ///
    /// The error is named after its type, so foreign causes stay distinguishable
    /// in `caused by` text. Sources, whose types are erased, are named `Error`.
    pub fn from_std<E>(error: &E) -> Self
    where
        E: core::error::Error + 'static,
    {
        let mut plain = Self::from_dyn(error);
        plain.name = short_type_name(core::any::type_name::<E>()).to_string();
        plain
    }

    /// Converts a type-erased standard error and its `source()` chain.
    pub fn from_dyn(error: &(dyn core::error::Error + 'static)) -> Self {
        let mut plain = Self::new(error.to_string());
        if let Some(source) = error.source() {
            plain.cause = Some(Box::new(AnyError::Plain(Self::from_dyn(source))));
        }
        plain
    }

    /// Sets the raw stack text.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Sets the cause.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<AnyError>) -> Self {
        self.cause = Some(Box::new(cause.into()));
        self
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

    /// Raw stack text, if any was recorded.
    #[inline]
    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&AnyError> {
        self.cause.as_deref()
    }
}

/// `my_app::db::QueryError<T>` becomes `QueryError`.
fn short_type_name(type_name: &str) -> &str {
    let path = type_name.split('<').next().unwrap_or(type_name);
    path.rsplit("::").next().unwrap_or(path)
}

/// Renders `"{name}: {message}"`, or just the name when the message is empty.
impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl core::error::Error for PlainError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}
