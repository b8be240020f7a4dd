//! Application error types.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::services::StoreError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("not found")]
    NotFound,

    #[error("invalid submission")]
    InvalidSubmission,

    #[error("storage unavailable")]
    Storage(#[from] StoreError),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidSubmission => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message safe to show to visitors.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Internal(_) => "Something went wrong on our side. Please try again later.",
            AppError::NotFound => "The page you were looking for does not exist.",
            AppError::InvalidSubmission => {
                "Invalid submission. Please reload the form and try again."
            }
            AppError::Storage(_) => {
                "We could not save your submission right now. Please try again in a moment."
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal details go to the log, never to the visitor.
        match &self {
            AppError::Internal(e) => tracing::error!(error = %e, "internal server error"),
            AppError::Storage(e) => tracing::error!(error = %e, "storage error"),
            _ => {}
        }

        let body = format!(
            "<!DOCTYPE html>\n<html><head><title>Error</title></head>\n<body><h1>{}</h1><p>{}</p></body></html>",
            self.status().canonical_reason().unwrap_or("Error"),
            self.public_message()
        );

        (self.status(), Html(body)).into_response()
    }
}
