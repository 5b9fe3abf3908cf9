//! Error handling and custom error types
//!
//! `Error` covers failures inside the crate; `ApiError` is what the HTTP
//! layer turns into a status code and an `{ "error": ... }` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Substrings of an upstream error message that mean the API key was
/// rejected rather than the request failing for some other reason.
pub const CREDENTIAL_ERROR_MARKERS: &[&str] = &["API key not valid", "403"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid JSON body")]
    InvalidBody,

    #[error("a summary or a file is required")]
    MissingContent,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("invalid API key, revoked, or insufficient permissions on the Google account")]
    InvalidCredentials,

    #[error("failed to process the request via AI; check GEMINI_API_KEY")]
    Upstream,
}

impl ApiError {
    /// Classify a failed model call into what the caller is allowed to see.
    pub fn from_upstream(err: &Error) -> Self {
        let message = err.to_string();
        if CREDENTIAL_ERROR_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
        {
            ApiError::InvalidCredentials
        } else {
            ApiError::Upstream
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody | ApiError::MissingContent => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InvalidCredentials | ApiError::Upstream => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_key_message_is_credential_error() {
        let err = Error::AiProvider(
            "Gemini API error (status 400 Bad Request): API key not valid. Please pass a valid API key."
                .to_string(),
        );
        assert_eq!(ApiError::from_upstream(&err), ApiError::InvalidCredentials);
    }

    #[test]
    fn test_forbidden_status_is_credential_error() {
        let err = Error::AiProvider("Gemini API error (status 403 Forbidden): denied".to_string());
        assert_eq!(ApiError::from_upstream(&err), ApiError::InvalidCredentials);
    }

    #[test]
    fn test_other_failures_are_generic() {
        let err = Error::AiProvider("Gemini API error (status 429): quota exceeded".to_string());
        assert_eq!(ApiError::from_upstream(&err), ApiError::Upstream);

        let err = Error::Config("connection reset".to_string());
        assert_eq!(ApiError::from_upstream(&err), ApiError::Upstream);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingContent.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::PayloadTooLarge(1024).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
