pub mod any_error;
pub mod kind_error;
