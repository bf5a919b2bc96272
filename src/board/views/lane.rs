//! Lane view: one column of the board and a drop target for cards.

use super::{Component, LaneLayout, MarkupRenderer, ProjectCard, RenderError};
use crate::board::{
    domain::{DragOverOutcome, LaneKind, PLAIN_TEXT_FORMAT, Project, ProjectId},
    ports::{DataTransfer, DropTarget},
    services::{ProjectStore, Subscription},
};
use mockable::{Clock, DefaultClock};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

#[derive(Debug, Default)]
struct LaneState {
    cards: Vec<ProjectCard>,
    refreshes: usize,
}

impl LaneState {
    fn rebuild(&mut self, lane: LaneKind, projects: &[Project], renderer: &Rc<MarkupRenderer>) {
        self.cards = projects
            .iter()
            .filter(|project| project.status() == lane.status())
            .map(|project| ProjectCard::new(project.clone(), Rc::clone(renderer)))
            .collect();
        self.refreshes += 1;
    }
}

/// Lane showing every project whose status matches the lane.
///
/// The lane keeps a filtered snapshot of the store, rebuilt in full on each
/// store notification. Configuring the lane subscribes it to the store and
/// primes the snapshot from the store's current projects.
pub struct LaneView<C = DefaultClock>
where
    C: Clock,
{
    kind: LaneKind,
    store: Rc<ProjectStore<C>>,
    layout: Rc<LaneLayout>,
    renderer: Rc<MarkupRenderer>,
    state: Rc<RefCell<LaneState>>,
    subscription: Option<Subscription>,
}

impl<C> LaneView<C>
where
    C: Clock,
{
    /// Creates an unconfigured lane and registers it with `layout`.
    #[must_use]
    pub fn new(
        kind: LaneKind,
        store: Rc<ProjectStore<C>>,
        layout: Rc<LaneLayout>,
        renderer: Rc<MarkupRenderer>,
    ) -> Self {
        layout.register(kind);
        Self {
            kind,
            store,
            layout,
            renderer,
            state: Rc::new(RefCell::new(LaneState::default())),
            subscription: None,
        }
    }

    /// Returns the lane kind.
    #[must_use]
    pub const fn kind(&self) -> LaneKind {
        self.kind
    }

    /// Returns the projects currently assigned to the lane.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.state
            .borrow()
            .cards
            .iter()
            .map(|card| card.project().clone())
            .collect()
    }

    /// Returns the cards currently rendered in the lane.
    #[must_use]
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.state.borrow().cards.clone()
    }

    /// Returns the card for `id`, when the project is in this lane.
    #[must_use]
    pub fn card(&self, id: ProjectId) -> Option<ProjectCard> {
        self.state
            .borrow()
            .cards
            .iter()
            .find(|card| card.project().id() == id)
            .cloned()
    }

    /// Returns the number of cards in the lane.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.state.borrow().cards.len()
    }

    /// Returns how many times the lane has rebuilt its snapshot.
    #[must_use]
    pub fn refresh_count(&self) -> usize {
        self.state.borrow().refreshes
    }

    /// Returns `true` once the lane listens to the store.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Stops listening to the store. The lane keeps its last snapshot.
    pub fn unsubscribe(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}

impl<C> Component for LaneView<C>
where
    C: Clock,
{
    fn configure(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let lane = self.kind;
        let state: Weak<RefCell<LaneState>> = Rc::downgrade(&self.state);
        let renderer = Rc::clone(&self.renderer);
        self.subscription = Some(self.store.subscribe(move |projects| {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().rebuild(lane, projects, &renderer);
                trace!(lane = %lane, "lane refreshed");
            }
        }));

        self.state
            .borrow_mut()
            .rebuild(lane, &self.store.projects(), &self.renderer);
    }

    fn render_content(&self) -> Result<String, RenderError> {
        let cards = self
            .state
            .borrow()
            .cards
            .iter()
            .map(Component::render_content)
            .collect::<Result<Vec<_>, _>>()?;
        self.renderer
            .render_lane(self.kind, self.layout.hint(self.kind), &cards)
    }
}

impl<C> DropTarget for LaneView<C>
where
    C: Clock,
{
    fn lane(&self) -> LaneKind {
        self.kind
    }

    fn on_drag_over(&self, transfer: &dyn DataTransfer) -> DragOverOutcome {
        let carries_text = transfer
            .types()
            .first()
            .is_some_and(|format| format == PLAIN_TEXT_FORMAT);
        if !carries_text {
            return DragOverOutcome::Reject;
        }
        self.layout.expand_all();
        DragOverOutcome::Accept
    }

    fn on_drop(&self, transfer: &dyn DataTransfer) -> bool {
        let Some(payload) = transfer.get_data(PLAIN_TEXT_FORMAT) else {
            trace!(lane = %self.kind, "drop without project payload");
            return false;
        };
        let id = match payload.parse::<ProjectId>() {
            Ok(id) => id,
            Err(error) => {
                debug!(lane = %self.kind, %error, "drop ignored");
                return false;
            }
        };
        self.store.move_project_status(id, self.kind.status())
    }

    fn on_drag_leave(&self) {
        self.layout.collapse_all();
    }
}
