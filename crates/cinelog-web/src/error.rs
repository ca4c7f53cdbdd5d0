//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// A form field failed coercion (non-numeric year, malformed id, ...).
  #[error("invalid form: {0}")]
  Form(#[from] cinelog_core::Error),

  #[error("credential hashing failed: {0}")]
  Credential(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
      Error::BadRequest(msg) => {
        (StatusCode::BAD_REQUEST, msg).into_response()
      }
      Error::Form(e) => {
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
      }
      Error::Credential(msg) => {
        (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
      }
      Error::Store(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
