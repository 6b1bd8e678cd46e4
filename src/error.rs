use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub const BLOCKED_DETAIL: &str = "API Blocked by basketball reference due to too many requests.";
pub const RETRY_AFTER_HINT: &str = "5min - 1hour";

#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Upstream refused us, timed out, or served a page without the schedule table.
    #[error("upstream blocked: {0}")]
    UpstreamBlocked(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamBlocked(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Parse(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!(error = %self, "request failed");
        match self {
            AppError::UpstreamBlocked(_) => HttpResponse::TooManyRequests()
                .insert_header((RETRY_AFTER, RETRY_AFTER_HINT))
                .json(json!({ "detail": BLOCKED_DETAIL })),
            _ => HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() })),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamBlocked(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
