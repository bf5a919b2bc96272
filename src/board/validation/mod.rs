//! Project input validation.
//!
//! [`rules`] holds the pure value validator; [`form`] applies it to the
//! three raw inputs of the project form.

pub mod error;
pub mod form;
pub mod rules;

pub use error::FormError;
pub use form::{FormField, FormInputs, ProjectFormConfig, ValidProject, validate_inputs};
pub use rules::{Constraints, FieldValue, validate};
