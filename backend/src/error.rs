//! Error handling for the N-Min Finder service
//!
//! Provides consistent JSON error responses for all failure paths.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use shared::SelectionError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("No valid numbers found in the file")]
    NoNumbersFound,

    // Spreadsheet errors
    #[error("Failed to read spreadsheet: {0}")]
    SpreadsheetRead(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::EmptyInput => AppError::NoNumbersFound,
            SelectionError::RankOutOfRange { len, .. } => AppError::Validation {
                field: "n".to_string(),
                message: format!("N must be between 1 and {}", len),
            },
        }
    }
}

/// Error response structure
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NoNumbersFound => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "NO_NUMBERS_FOUND".to_string(),
                    message: "No valid numbers found in the file".to_string(),
                    field: None,
                },
            ),
            AppError::SpreadsheetRead(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "SPREADSHEET_READ_ERROR".to_string(),
                    message: format!("Failed to read spreadsheet: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
