//! Board composition root.

use super::{Component, LaneLayout, LaneView, MarkupRenderer, ProjectInputForm, RenderError, mount};
use crate::board::{
    config::BoardConfig,
    domain::{LaneKind, Project},
    services::ProjectStore,
};
use mockable::{Clock, DefaultClock};
use serde::Serialize;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

/// A project board: one store shared by the form and every lane.
pub struct Board<C = DefaultClock>
where
    C: Clock,
{
    store: Rc<ProjectStore<C>>,
    layout: Rc<LaneLayout>,
    form: ProjectInputForm<C>,
    lanes: Vec<LaneView<C>>,
}

#[derive(Serialize)]
struct BoardSnapshot<'a> {
    projects: &'a [Project],
    lanes: Vec<LaneSnapshot>,
}

#[derive(Serialize)]
struct LaneSnapshot {
    lane: LaneKind,
    projects: Vec<String>,
}

impl Board<DefaultClock> {
    /// Builds a board with the default configuration and system clock.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the templates fail to load or render.
    pub fn with_defaults() -> Result<Self, RenderError> {
        Self::new(&BoardConfig::default(), Arc::new(DefaultClock))
    }
}

impl<C> Board<C>
where
    C: Clock,
{
    /// Builds a board, mounting the configured lanes in order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the templates fail to load or render.
    pub fn new(config: &BoardConfig, clock: Arc<C>) -> Result<Self, RenderError> {
        let store = Rc::new(ProjectStore::new(clock));
        let layout = Rc::new(LaneLayout::new(config.lane_min_height));
        let renderer = Rc::new(MarkupRenderer::new()?);
        let form = ProjectInputForm::new(Rc::clone(&store), config.form);

        let mut lanes = Vec::with_capacity(config.lanes.len());
        for kind in &config.lanes {
            if lanes.iter().any(|lane: &LaneView<C>| lane.kind() == *kind) {
                continue;
            }
            let mut lane = LaneView::new(
                *kind,
                Rc::clone(&store),
                Rc::clone(&layout),
                Rc::clone(&renderer),
            );
            mount(&mut lane)?;
            lanes.push(lane);
        }
        debug!(lanes = lanes.len(), "board assembled");

        Ok(Self {
            store,
            layout,
            form,
            lanes,
        })
    }

    /// Returns the shared project store.
    #[must_use]
    pub const fn store(&self) -> &Rc<ProjectStore<C>> {
        &self.store
    }

    /// Returns the shared lane layout.
    #[must_use]
    pub const fn layout(&self) -> &Rc<LaneLayout> {
        &self.layout
    }

    /// Returns the project form.
    #[must_use]
    pub const fn form(&self) -> &ProjectInputForm<C> {
        &self.form
    }

    /// Returns the project form for editing and submission.
    pub const fn form_mut(&mut self) -> &mut ProjectInputForm<C> {
        &mut self.form
    }

    /// Returns the lanes in display order.
    #[must_use]
    pub fn lanes(&self) -> &[LaneView<C>] {
        &self.lanes
    }

    /// Returns the lane of the given kind.
    #[must_use]
    pub fn lane(&self, kind: LaneKind) -> Option<&LaneView<C>> {
        self.lanes.iter().find(|lane| lane.kind() == kind)
    }

    /// Renders every lane in display order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a lane fails to render.
    pub fn render(&self) -> Result<String, RenderError> {
        let rendered = self
            .lanes
            .iter()
            .map(Component::render_content)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join("\n"))
    }

    /// Serialises the projects and lane assignments as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when serialisation fails.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        let projects = self.store.projects();
        let lanes = self
            .lanes
            .iter()
            .map(|lane| LaneSnapshot {
                lane: lane.kind(),
                projects: lane
                    .projects()
                    .iter()
                    .map(|project| project.id().to_string())
                    .collect(),
            })
            .collect();
        serde_json::to_string_pretty(&BoardSnapshot {
            projects: &projects,
            lanes,
        })
    }
}
