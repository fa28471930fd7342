//! HTTP-facing error type and the mapping from domain failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::error::Error as _;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::errors::StorageError;
use crate::utils::alias_generator::AliasError;
use crate::utils::url_normalizer::UrlNormalizationError;

/// Error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

/// Errors surfaced by handlers and services.
///
/// `Internal` messages are generic; the underlying cause is logged where the
/// error is created and never reaches the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its client-facing payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            status: "error",
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_info())).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::AliasExists { op } => {
                tracing::info!(op, "url already exists");
                AppError::conflict("url already exists", Value::Null)
            }
            StorageError::NotFound { op } => {
                tracing::debug!(op, "url not found");
                AppError::not_found("url not found", Value::Null)
            }
            StorageError::InvalidInput { op, field } => {
                tracing::warn!(op, field, "rejected empty input");
                AppError::bad_request(
                    format!("field {field} is a required field"),
                    json!({ "field": field }),
                )
            }
            StorageError::Storage { op, ref source } => {
                tracing::error!(op, error = %source, "storage operation failed");
                AppError::internal("internal server error", Value::Null)
            }
        }
    }
}

impl From<AliasError> for AppError {
    fn from(err: AliasError) -> Self {
        if err.is_rejected_input() {
            tracing::warn!(error = %err, "rejected alias");
            return AppError::bad_request(
                "field alias is not valid",
                json!({ "field": "alias", "reason": err.to_string() }),
            );
        }

        tracing::error!(
            op = "utils.alias_generator",
            error = %err,
            cause = ?err.source(),
            "failed to generate alias"
        );
        AppError::internal("internal server error", Value::Null)
    }
}

impl From<UrlNormalizationError> for AppError {
    fn from(err: UrlNormalizationError) -> Self {
        tracing::warn!(error = %err, "rejected url");
        AppError::bad_request(
            "field url is not valid",
            json!({ "field": "url", "reason": err.to_string() }),
        )
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        let message = fields
            .iter()
            .map(|field| format!("field {field} is not valid"))
            .collect::<Vec<_>>()
            .join(", ");

        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);

        AppError::bad_request(message, details)
    }
}
