//! Error types for `cinelog-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A form field that must coerce to an integer did not.
  #[error("field {field:?} must be a whole number, got {value:?}")]
  InvalidInteger { field: &'static str, value: String },

  /// A form field that must name a record did not hold a valid id.
  #[error("field {field:?} is not a valid record id: {value:?}")]
  InvalidId { field: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
