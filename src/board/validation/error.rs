//! Error types for project form submission.

use super::FormField;
use thiserror::Error;

/// Errors returned when the project form rejects its inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// One or more fields failed validation; nothing was created.
    #[error("please enter valid values for: {}", join_fields(.fields))]
    Validation {
        /// Every failing field, in form order.
        fields: Vec<FormField>,
    },
}

impl FormError {
    /// Returns the failing fields.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        match self {
            Self::Validation { fields } => fields,
        }
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
