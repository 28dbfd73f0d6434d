//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::chat::ChatError;
use crate::pipeline::extraction::ExtractionError;
use crate::pipeline::generation::{CompletionError, GenerationError};
use crate::pipeline::grading::InvalidInputError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
///
/// Generation failures keep distinct codes so clients can tell "no
/// document", "extraction failed", "service unreachable", and
/// "response unparseable" apart; collapsing them into one generic
/// message loses actionable information.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No document provided")]
    NoDocument,
    #[error("Document not found: {0}")]
    DocumentNotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("No text extracted from the document")]
    EmptyDocument,
    #[error("Completion service unreachable: {0}")]
    ServiceUnreachable(String),
    #[error("Completion service failed: {0}")]
    ServiceFailed(String),
    #[error("Completion response unparseable")]
    ResponseUnparseable,
    #[error("Invalid quiz data from completion service: {0}")]
    InvalidQuizData(String),
    #[error("Invalid grading request: {0}")]
    InvalidGradeRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NoDocument => (
                StatusCode::BAD_REQUEST,
                "NO_DOCUMENT",
                "No document provided. Upload a document or reference a stored one.".to_string(),
            ),
            ApiError::DocumentNotFound(path) => (
                StatusCode::NOT_FOUND,
                "DOCUMENT_NOT_FOUND",
                format!("Document not found: {path}"),
            ),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::ExtractionFailed(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILED",
                format!("Failed to extract text from the document: {detail}"),
            ),
            ApiError::EmptyDocument => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_DOCUMENT",
                "No text extracted from the document".to_string(),
            ),
            ApiError::ServiceUnreachable(detail) => (
                StatusCode::BAD_GATEWAY,
                "SERVICE_UNREACHABLE",
                format!("Completion service unreachable: {detail}"),
            ),
            ApiError::ServiceFailed(detail) => {
                (StatusCode::BAD_GATEWAY, "SERVICE_ERROR", detail.clone())
            }
            ApiError::ResponseUnparseable => (
                StatusCode::BAD_GATEWAY,
                "RESPONSE_UNPARSEABLE",
                "Completion response could not be parsed as quiz data".to_string(),
            ),
            ApiError::InvalidQuizData(detail) => (
                StatusCode::BAD_GATEWAY,
                "INVALID_QUIZ_DATA",
                detail.clone(),
            ),
            ApiError::InvalidGradeRequest(detail) => {
                (StatusCode::BAD_REQUEST, "INVALID_QUIZ", detail.clone())
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::NoDocument => ApiError::NoDocument,
            GenerationError::DocumentNotFound(path) => {
                ApiError::DocumentNotFound(path.display().to_string())
            }
            GenerationError::InvalidParams(e) => ApiError::BadRequest(e.to_string()),
            GenerationError::Extraction(ExtractionError::EmptyDocument) => ApiError::EmptyDocument,
            GenerationError::Extraction(e) => ApiError::ExtractionFailed(e.to_string()),
            GenerationError::Completion(CompletionError::Connection(url)) => {
                ApiError::ServiceUnreachable(url)
            }
            GenerationError::Completion(e) => ApiError::ServiceFailed(e.to_string()),
            GenerationError::Parse(_) => ApiError::ResponseUnparseable,
            GenerationError::Validation(e) => ApiError::InvalidQuizData(e.to_string()),
        }
    }
}

impl From<InvalidInputError> for ApiError {
    fn from(err: InvalidInputError) -> Self {
        ApiError::InvalidGradeRequest(err.to_string())
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyQuery => ApiError::BadRequest("Message cannot be empty".into()),
            ChatError::Completion(CompletionError::Connection(url)) => {
                ApiError::ServiceUnreachable(url)
            }
            ChatError::Completion(e) => ApiError::ServiceFailed(e.to_string()),
        }
    }
}
