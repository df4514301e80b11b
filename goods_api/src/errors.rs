// goods_api/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// A goods record or cart line with the same `goodsId` already exists.
  #[error("{0}")]
  DuplicateEntity(String),

  /// Rejected input: quantity below 1, malformed body, bad path id.
  #[error("{0}")]
  InvalidArgument(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Message placed in the `errorMessage` field of the response body.
  /// Storage and internal details stay in the logs.
  fn client_message(&self) -> String {
    match self {
      AppError::DuplicateEntity(m) | AppError::InvalidArgument(m) => m.clone(),
      AppError::Config(_) => "Configuration issue".to_string(),
      AppError::Sqlx(_) | AppError::Migrate(_) => "Database operation failed".to_string(),
      AppError::Internal(_) => "An internal error occurred".to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::DuplicateEntity(_) | AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Migrate(_) | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Rejecting request");
    }
    HttpResponse::build(status).json(json!({
        "success": false,
        "errorMessage": self.client_message(),
    }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
