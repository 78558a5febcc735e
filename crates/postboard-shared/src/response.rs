//! Response envelopes for machine-readable output.

use serde::{Deserialize, Serialize};

use postboard_core::domain::ValidationErrors;

use crate::dto::FieldErrorView;

/// Standard successful response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

/// Problem description for a failed action, loosely after RFC 7807.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable problem kind.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem.
    pub title: String,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Inline messages, one per failing field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldErrorView>>,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            title: title.into(),
            detail: None,
            field_errors: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("not_found", "Not Found").with_detail(detail)
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        let mut response = Self::new("validation", "Validation Failed");
        response.field_errors = Some(errors.iter().map(FieldErrorView::from).collect());
        response
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new("internal", "Internal Error").with_detail(detail)
    }
}
