/// Error types for company-ranking-service
///
/// Errors are converted to the shared `ErrorResponse` envelope. Database
/// failures are passed through with the driver's message.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use error_types::{error_codes, ErrorResponse};
use thiserror::Error;

use crate::domain::DomainError;

/// Result type for company-ranking-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (error_type, code) = match self {
            AppError::Database(_) => ("server_error", error_codes::DATABASE_ERROR),
            AppError::BadRequest(_) => ("validation_error", error_codes::INVALID_REQUEST),
            AppError::NotFound(_) => ("not_found_error", error_codes::COMPANY_NOT_FOUND),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            &self.to_string(),
            status.as_u16(),
            error_type,
            code,
        );

        HttpResponse::build(status).json(response)
    }
}
