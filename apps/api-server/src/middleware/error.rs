//! Error translation - the single place domain failures become HTTP responses.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{
    HttpRequest, HttpResponse, ResponseError, http::StatusCode, http::header::ContentType,
};
use std::fmt;

use blog_core::error::{DomainError, RepoError};

/// Application-level error type returned by handlers.
#[derive(Debug)]
pub enum AppError {
    /// Any "entity not found" failure, carrying the exact client-facing message.
    NotFound(String),
    /// Unparseable path segment or request body. The detail is logged, never sent.
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(message) => HttpResponse::build(self.status_code())
                .content_type(ContentType::plaintext())
                .body(message.clone()),
            AppError::BadRequest(detail) => {
                tracing::debug!("Rejected request: {}", detail);
                HttpResponse::build(self.status_code()).finish()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code()).finish()
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            not_found @ DomainError::NotFound { .. } => AppError::NotFound(not_found.to_string()),
            DomainError::Repository(repo) => repo.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Error handler for `web::PathConfig`.
pub fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Error handler for `web::JsonConfig`.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
