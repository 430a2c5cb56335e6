use thiserror::Error;

use kwal_client::ApiError;
use kwal_models::{FieldErrors, FilterError};

pub type ViewResult<T> = Result<T, ViewError>;

/// Failures surfaced by page actions.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Form input rejected before any request was made.
    #[error("Please fix the highlighted fields: {0}")]
    Invalid(#[from] FieldErrors),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("You need to sign in first")]
    SignedOut,

    #[error("No email found for this account. Please add an email to your account first.")]
    MissingEmail,

    #[error("Employer access required")]
    Forbidden,
}

impl ViewError {
    /// Field-level messages from local validation or the server.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Invalid(errors) => errors.clone(),
            Self::Api(e) => {
                let mut errors = FieldErrors::new();
                for field in e.field_errors() {
                    errors.insert(field.path.clone(), field.msg.clone());
                }
                errors
            }
            _ => FieldErrors::new(),
        }
    }
}
