//! Template-based markup rendering for lanes and cards.

use crate::board::domain::{LaneKind, MinHeightHint, Project};
use minijinja::{Environment, context};
use thiserror::Error;

/// Template name of a project card.
pub const CARD_TEMPLATE: &str = "single-project.html";

/// Template name of a lane.
pub const LANE_TEMPLATE: &str = "project-list.html";

const CARD_SOURCE: &str = r#"<li id="{{ id }}" draggable="true">
  <h5>{{ title }}</h5>
  <h6>{{ people }}</h6>
  <p>{{ description }}</p>
</li>"#;

const LANE_SOURCE: &str = r#"<section class="projects" id="{{ element_id }}">
  <header>
    <h2>{{ heading }}</h2>
  </header>
  <ul id="{{ list_id }}" style="min-height: {{ min_height }}">
  {%- for card in cards %}
    {{ card | safe }}
  {%- endfor %}
  </ul>
</section>"#;

/// Errors returned while rendering markup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A template could not be loaded or rendered.
    #[error("failed to render template '{template}': {reason}")]
    Template {
        /// Template name.
        template: String,
        /// Underlying renderer message.
        reason: String,
    },
}

impl RenderError {
    fn template(template: &str, error: &minijinja::Error) -> Self {
        Self::Template {
            template: template.to_owned(),
            reason: error.to_string(),
        }
    }
}

/// Renders board markup from the card and lane templates.
///
/// Values are HTML-escaped; nested card markup is inserted verbatim.
#[derive(Debug)]
pub struct MarkupRenderer {
    environment: Environment<'static>,
}

impl MarkupRenderer {
    /// Creates a renderer with the card and lane templates loaded.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        environment
            .add_template(CARD_TEMPLATE, CARD_SOURCE)
            .map_err(|error| RenderError::template(CARD_TEMPLATE, &error))?;
        environment
            .add_template(LANE_TEMPLATE, LANE_SOURCE)
            .map_err(|error| RenderError::template(LANE_TEMPLATE, &error))?;
        Ok(Self { environment })
    }

    /// Renders a project card.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the card template fails.
    pub fn render_card(&self, project: &Project) -> Result<String, RenderError> {
        let context = context! {
            id => project.id().to_string(),
            title => project.title(),
            people => project.people(),
            description => project.description(),
        };
        self.render(CARD_TEMPLATE, context)
    }

    /// Renders a lane around already rendered cards.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the lane template fails.
    pub fn render_lane(
        &self,
        lane: LaneKind,
        min_height: MinHeightHint,
        cards: &[String],
    ) -> Result<String, RenderError> {
        let context = context! {
            element_id => lane.element_id(),
            list_id => lane.list_id(),
            heading => lane.heading(),
            min_height => min_height.to_css(),
            cards => cards,
        };
        self.render(LANE_TEMPLATE, context)
    }

    fn render(&self, name: &str, context: minijinja::Value) -> Result<String, RenderError> {
        self.environment
            .get_template(name)
            .and_then(|template| template.render(context))
            .map_err(|error| RenderError::template(name, &error))
    }
}
