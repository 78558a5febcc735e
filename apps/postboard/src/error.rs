//! Error handling - maps domain failures to alerts, exit codes, and
//! machine-readable error bodies.

use std::io;

use thiserror::Error;

use postboard_core::DomainError;
use postboard_core::domain::ValidationErrors;
use postboard_shared::ErrorResponse;
use postboard_shared::render::UPDATE_NOT_FOUND;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The form was rejected; shown inline, one message per field.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The target post vanished; shown as an alert.
    #[error("{alert}")]
    NotFound { alert: &'static str, id: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn not_found(alert: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            alert,
            id: id.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation(_) => 2,
            AppError::NotFound { .. } => 3,
            AppError::Io(_) | AppError::Serialization(_) => 1,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            AppError::Validation(errors) => ErrorResponse::validation(errors),
            AppError::NotFound { alert, id } => {
                ErrorResponse::not_found(format!("{alert} (id: {id})"))
            }
            AppError::Io(e) => ErrorResponse::internal(e.to_string()),
            AppError::Serialization(e) => ErrorResponse::internal(e.to_string()),
        }
    }

    /// Lines shown to a person reading the terminal.
    pub fn alert_lines(&self) -> Vec<String> {
        match self {
            AppError::Validation(errors) => errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message()))
                .collect(),
            other => vec![other.to_string()],
        }
    }
}

// Submissions only fail with NotFound when the edit target vanished.
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { id } => AppError::not_found(UPDATE_NOT_FOUND, id.to_string()),
            DomainError::Validation(errors) => AppError::Validation(errors),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
