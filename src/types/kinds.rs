/// Well-known error kinds.
///
/// Kinds are open-ended strings; these are the ones the crate itself uses and
/// that most services share. Any whitespace-free token is a valid kind.
///
/// # Examples
///
/// ```
/// use kind_error::{Errors, KindError, KindErrorOptions};
///
/// let err = KindError::new("no such user", Errors::NOT_FOUND, KindErrorOptions::default()).unwrap();
/// assert_eq!(err.name(), "NotFoundError");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Errors;

impl Errors {
    /// The kind used when none is given.
    pub const UNKNOWN: &'static str = "Unknown";
    /// Something went wrong inside the service itself.
    pub const INTERNAL: &'static str = "Internal";
    /// A caller supplied bad input.
    pub const INVALID_INPUT: &'static str = "InvalidInput";
    /// An API was used incorrectly, e.g. called in the wrong state.
    pub const INVALID_USE: &'static str = "InvalidUse";
    pub const NOT_FOUND: &'static str = "NotFound";
    pub const NOT_ALLOWED: &'static str = "NotAllowed";
    pub const UNAUTHORIZED: &'static str = "Unauthorized";
    pub const NOT_IMPLEMENTED: &'static str = "NotImplemented";
    /// A downstream service failed in a way that may succeed on retry.
    pub const TRANSIENT_SERVICE: &'static str = "TransientService";
    /// A downstream service failed in a way that will not succeed on retry.
    pub const UNRECOVERABLE_SERVICE: &'static str = "UnrecoverableService";
}
