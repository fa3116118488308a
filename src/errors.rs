use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Which end of the accepted transcript length range was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputBound {
    Min,
    Max,
}

impl fmt::Display for InputBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputBound::Min => write!(f, "minimum"),
            InputBound::Max => write!(f, "maximum"),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid video reference: {0}")]
    InvalidReference(String),

    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    #[error("Error fetching transcript: {0}")]
    AcquisitionFailure(String),

    #[error("Transcript length {length} violates the {bound} of {limit} characters")]
    InputSize {
        bound: InputBound,
        length: usize,
        limit: usize,
    },

    #[error("Content too long: {0}")]
    ContentTooLong(String),

    #[error("Completion provider error: {0}")]
    ProviderFailure(String),

    #[error("Invalid JSON response from AI: {0}")]
    MalformedCompletion(String),

    #[error("Invalid response shape: {0}")]
    ValidationFailure(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidReference(_) => "INVALID_REFERENCE",
            AppError::TranscriptUnavailable(_) => "TRANSCRIPT_UNAVAILABLE",
            AppError::AcquisitionFailure(_) => "ACQUISITION_FAILURE",
            AppError::InputSize { .. } => "INPUT_SIZE_ERROR",
            AppError::ContentTooLong(_) => "CONTENT_TOO_LONG",
            AppError::ProviderFailure(_) => "PROVIDER_FAILURE",
            AppError::MalformedCompletion(_) => "MALFORMED_COMPLETION",
            AppError::ValidationFailure(_) => "VALIDATION_FAILURE",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub category: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            AppError::TranscriptUnavailable(_) => StatusCode::NOT_FOUND,
            AppError::AcquisitionFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::InputSize {
                bound: InputBound::Min,
                ..
            } => StatusCode::BAD_REQUEST,
            AppError::InputSize {
                bound: InputBound::Max,
                ..
            } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ContentTooLong(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ProviderFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedCompletion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            category: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ProviderFailure(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
