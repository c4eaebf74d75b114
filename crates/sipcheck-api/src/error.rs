//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use sipcheck_core::ValidationError;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("Error: {0}")]
  Export(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Export(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
