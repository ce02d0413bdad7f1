//! Set rules: the validity predicate and set completion.

pub mod validator;

pub use validator::{complete_set, is_valid_set, SET_SIZE};
