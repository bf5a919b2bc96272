//! Validation of the project form's raw inputs.

use super::{Constraints, FieldValue, FormError, validate};
use std::fmt;

/// Input fields of the project form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Project title.
    Title,
    /// Project description.
    Description,
    /// Number of people assigned.
    People,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [Self; 3] = [Self::Title, Self::Description, Self::People];

    /// Returns the input name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values currently entered in the project form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    /// Raw title input.
    pub title: String,
    /// Raw description input.
    pub description: String,
    /// Raw people input.
    pub people: String,
}

impl FormInputs {
    /// Creates a set of inputs.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Returns the raw value of `field`.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    /// Replaces the raw value of `field`.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        };
        *slot = value.into();
    }

    /// Empties every input.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// Constraints applied to each form field.
///
/// # Examples
///
/// ```
/// use lanebook::board::validation::ProjectFormConfig;
///
/// let config = ProjectFormConfig::default();
/// assert_eq!(config.title.max_length, Some(12));
///
/// let lenient = ProjectFormConfig::lenient();
/// assert_eq!(lenient.title.max_length, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectFormConfig {
    /// Constraints on the title.
    pub title: Constraints,
    /// Constraints on the description.
    pub description: Constraints,
    /// Constraints on the people count.
    pub people: Constraints,
}

impl Default for ProjectFormConfig {
    fn default() -> Self {
        Self {
            title: Constraints::new().required().min_length(4).max_length(12),
            description: Constraints::new().required().min_length(30).max_length(320),
            people: Constraints::new().required().min(1.0).max(7.0),
        }
    }
}

impl ProjectFormConfig {
    /// Creates a configuration that only requires every field to be present.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            title: Constraints::new().required(),
            description: Constraints::new().required(),
            people: Constraints::new().required(),
        }
    }

    /// Returns the constraints for `field`.
    #[must_use]
    pub const fn constraints(&self, field: FormField) -> &Constraints {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }
}

/// Inputs that passed validation, ready to become a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProject {
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
}

/// Validates every input against `config`.
///
/// All fields are checked before returning so the error lists each failing
/// field. The people input must parse as a whole number.
///
/// # Errors
///
/// Returns [`FormError::Validation`] when any field fails.
pub fn validate_inputs(
    inputs: &FormInputs,
    config: &ProjectFormConfig,
) -> Result<ValidProject, FormError> {
    let people = parse_people(&inputs.people);
    let mut failures = Vec::new();

    for field in FormField::ALL {
        let value = match field {
            FormField::People => people.map_or_else(
                || FieldValue::text(inputs.people.as_str()),
                |count| FieldValue::number(f64::from(count)),
            ),
            FormField::Title | FormField::Description => FieldValue::text(inputs.get(field)),
        };
        let parsed = field != FormField::People || people.is_some();
        if !parsed || !validate(&value, config.constraints(field)) {
            failures.push(field);
        }
    }

    match people {
        Some(count) if failures.is_empty() => Ok(ValidProject {
            title: inputs.title.clone(),
            description: inputs.description.clone(),
            people: count,
        }),
        _ => Err(FormError::Validation { fields: failures }),
    }
}

fn parse_people(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
