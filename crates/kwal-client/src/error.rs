//! API error types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// A field-level validation failure reported by the backend.
///
/// Extra keys the backend sends along (`type`, `value`, `location`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub msg: String,
}

/// Errors that can occur while talking to the backend.
///
/// A 404 is not an error; the request helper turns it into `None`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. Displays as the server's message alone.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        field_errors: Vec<FieldError>,
        raw: Option<Value>,
    },

    #[error("{0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build the error for a non-2xx response from its (possibly absent) JSON body.
    ///
    /// The message prefers `message`, then `error`, then a generic status line.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let text_field = |key: &str| {
            body.as_ref()
                .and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let message = text_field("message")
            .or_else(|| text_field("error"))
            .unwrap_or_else(|| format!("Request failed with {}", status));

        let field_errors = body
            .as_ref()
            .and_then(|b| b.get("errors"))
            .and_then(|errors| serde_json::from_value::<Vec<FieldError>>(errors.clone()).ok())
            .unwrap_or_default();

        Self::Http {
            status,
            message,
            field_errors,
            raw: body,
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Field-level errors reported by the backend; empty for other failures.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ApiError::Http { field_errors, .. } => field_errors,
            _ => &[],
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}
