//! Project card: a draggable rendering of one project.

use super::{Component, MarkupRenderer, RenderError};
use crate::board::{
    domain::{DropEffect, PLAIN_TEXT_FORMAT, Project, ProjectId},
    ports::{DataTransfer, DragSource},
};
use std::rc::Rc;
use tracing::debug;

/// Card rendered inside a lane for a single project.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    project: Project,
    renderer: Rc<MarkupRenderer>,
}

impl ProjectCard {
    /// Creates a card for `project`.
    #[must_use]
    pub const fn new(project: Project, renderer: Rc<MarkupRenderer>) -> Self {
        Self { project, renderer }
    }

    /// Returns the project shown on the card.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the card's element identifier, which is the project id.
    #[must_use]
    pub fn element_id(&self) -> String {
        self.project.id().to_string()
    }
}

impl Component for ProjectCard {
    fn render_content(&self) -> Result<String, RenderError> {
        self.renderer.render_card(&self.project)
    }
}

impl DragSource for ProjectCard {
    fn on_drag_start(&self, transfer: &mut dyn DataTransfer) -> ProjectId {
        let id = self.project.id();
        transfer.set_data(PLAIN_TEXT_FORMAT, &id.to_string());
        transfer.set_effect_allowed(DropEffect::Move);
        id
    }

    fn on_drag_end(&self, transfer: &dyn DataTransfer) {
        debug!(
            project_id = %self.project.id(),
            effect = %transfer.effect_allowed(),
            "card drag ended"
        );
    }
}
