#![forbid(unsafe_code)]

pub mod conjugator;
pub mod endings;
pub mod error;
pub mod model;

pub use conjugator::{ConjugationError, Conjugator, regular_table};
pub use error::Error;
