//! Parsing and validation of list query parameters.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod pagination;

#[derive(Debug, Error)]
/// Errors that can occur when processing query parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    InvalidQuery(#[from] serde_html_form::de::Error),

    #[error("invalid value: {0}")]
    Constraint(#[from] TypeConstraintError),
}
