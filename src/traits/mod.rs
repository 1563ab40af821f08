//! Core traits for walking error chains.
//!
//! - [`CauseChain`]: abstraction over values that link to the value that caused them
//! - [`errors_from_error`]: the chain as an iterator, root-to-leaf or leaf-to-root

pub mod cause_chain;

pub use cause_chain::{errors_from_error, CauseChain, ErrorsFromError, Order};
