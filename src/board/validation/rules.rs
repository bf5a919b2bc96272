//! Value validator.
//!
//! Bounds are exclusive below and inclusive above: a text passes
//! `min_length` when its length is strictly greater, and `max_length` when
//! its length is at most the bound. Numeric `min`/`max` behave the same way.
//! A bound of zero counts as unset.

use std::fmt;

/// Raw value submitted for validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Textual input.
    Text(String),
    /// Numeric input.
    Number(f64),
}

impl FieldValue {
    /// Creates a textual value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a numeric value.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Constraints a value must satisfy. Unset options are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constraints {
    /// Value must be non-empty after trimming.
    pub required: bool,
    /// Text length must exceed this bound.
    pub min_length: Option<usize>,
    /// Text length must not exceed this bound.
    pub max_length: Option<usize>,
    /// Number must exceed this bound.
    pub min: Option<f64>,
    /// Number must not exceed this bound.
    pub max: Option<f64>,
}

impl Constraints {
    /// Creates an empty constraint set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires a non-blank value.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the exclusive lower length bound.
    #[must_use]
    pub const fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    /// Sets the inclusive upper length bound.
    #[must_use]
    pub const fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    /// Sets the exclusive lower numeric bound.
    #[must_use]
    pub const fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Sets the inclusive upper numeric bound.
    #[must_use]
    pub const fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Returns `true` when `value` satisfies every set constraint.
#[must_use]
pub fn validate(value: &FieldValue, constraints: &Constraints) -> bool {
    if constraints.required && value.to_string().trim().is_empty() {
        return false;
    }

    match value {
        FieldValue::Text(text) => text_within_bounds(text, constraints),
        FieldValue::Number(number) => number_within_bounds(*number, constraints),
    }
}

fn text_within_bounds(text: &str, constraints: &Constraints) -> bool {
    let length = text.chars().count();
    let above_min = set_length_bound(constraints.min_length).is_none_or(|bound| length > bound);
    let below_max = set_length_bound(constraints.max_length).is_none_or(|bound| length <= bound);
    above_min && below_max
}

fn number_within_bounds(number: f64, constraints: &Constraints) -> bool {
    let above_min = set_number_bound(constraints.min).is_none_or(|bound| number > bound);
    let below_max = set_number_bound(constraints.max).is_none_or(|bound| number <= bound);
    above_min && below_max
}

fn set_length_bound(bound: Option<usize>) -> Option<usize> {
    bound.filter(|value| *value != 0)
}

fn set_number_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value != 0.0)
}
