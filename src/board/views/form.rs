//! Project input form.

use crate::board::{
    domain::ProjectId,
    services::ProjectStore,
    validation::{FormError, FormField, FormInputs, ProjectFormConfig, validate_inputs},
};
use mockable::{Clock, DefaultClock};
use std::rc::Rc;
use tracing::debug;

/// Form collecting the title, description and people count of a project.
///
/// Submission is all or nothing: when any field fails validation nothing is
/// created and the inputs are kept for correction.
pub struct ProjectInputForm<C = DefaultClock>
where
    C: Clock,
{
    store: Rc<ProjectStore<C>>,
    config: ProjectFormConfig,
    inputs: FormInputs,
}

impl<C> ProjectInputForm<C>
where
    C: Clock,
{
    /// Creates an empty form submitting to `store`.
    #[must_use]
    pub fn new(store: Rc<ProjectStore<C>>, config: ProjectFormConfig) -> Self {
        Self {
            store,
            config,
            inputs: FormInputs::default(),
        }
    }

    /// Returns the raw inputs.
    #[must_use]
    pub const fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    /// Returns the raw value of `field`.
    #[must_use]
    pub fn input(&self, field: FormField) -> &str {
        self.inputs.get(field)
    }

    /// Replaces the raw value of `field`.
    pub fn set_input(&mut self, field: FormField, value: impl Into<String>) {
        self.inputs.set(field, value);
    }

    /// Replaces every input at once.
    pub fn fill(&mut self, inputs: FormInputs) {
        self.inputs = inputs;
    }

    /// Validates the inputs and creates a project from them.
    ///
    /// The inputs are cleared after a successful submission.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] listing every failing field.
    pub fn submit(&mut self) -> Result<ProjectId, FormError> {
        let project = validate_inputs(&self.inputs, &self.config).inspect_err(|error| {
            debug!(%error, "project form rejected");
        })?;
        let id = self
            .store
            .create_project(project.title, project.description, project.people);
        self.clear_inputs();
        Ok(id)
    }

    /// Empties every input.
    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
    }
}
