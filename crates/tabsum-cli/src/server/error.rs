//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tabsum::TabsumError;

/// API error type.
#[derive(Debug)]
#[allow(dead_code)] // Variants kept for API completeness
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
    /// Error from the tabsum library.
    Tabsum(TabsumError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
            ApiError::Tabsum(e) => {
                let status = match e {
                    TabsumError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                    _ => StatusCode::BAD_REQUEST,
                };
                let error = match e {
                    TabsumError::UnsupportedFileType(_) => "unsupported_file_type",
                    TabsumError::Encoding(_) => "encoding_error",
                    TabsumError::EmptyFile(_) => "empty_file",
                    TabsumError::MalformedHeader(_) => "malformed_header",
                    TabsumError::FileTooLarge { .. } => "file_too_large",
                    TabsumError::Io { .. } | TabsumError::Csv(_) => "parse_error",
                };
                return (
                    status,
                    Json(ErrorResponse {
                        error: error.to_string(),
                        message: e.to_string(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<TabsumError> for ApiError {
    fn from(err: TabsumError) -> Self {
        ApiError::Tabsum(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Tabsum(e) => write!(f, "Analysis error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
