//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Handlers only read a dataset that was validated at startup, so the one
/// failure a request can cause is naming something that does not exist.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),
}

impl ApiError {
  pub fn unknown_tab(id: &str) -> Self {
    ApiError::NotFound(format!("tab {id:?} not found"))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
