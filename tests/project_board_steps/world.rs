//! Shared world state for project board BDD scenarios.

use std::cell::Cell;
use std::rc::Rc;

use lanebook::board::{
    domain::{LaneKind, ProjectId},
    services::{DragGesture, Subscription},
    validation::FormError,
    views::Board,
};
use rstest::fixture;

/// Scenario world for project board behaviour tests.
pub struct BoardWorld {
    pub board: Board,
    pub notifications: Rc<Cell<usize>>,
    pub notifications_before_drop: usize,
    pub last_project: Option<ProjectId>,
    pub last_submission: Option<Result<ProjectId, FormError>>,
    pub last_drop_moved: Option<bool>,
    _subscription: Subscription,
}

impl BoardWorld {
    /// Creates a world around an empty board with a counting listener.
    #[must_use]
    pub fn new() -> Self {
        let board = Board::with_defaults()
            .unwrap_or_else(|error| panic!("board templates should compile: {error}"));
        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        let subscription = board
            .store()
            .subscribe(move |_| counter.set(counter.get() + 1));

        Self {
            board,
            notifications,
            notifications_before_drop: 0,
            last_project: None,
            last_submission: None,
            last_drop_moved: None,
            _subscription: subscription,
        }
    }

    /// Drags the last created project's card onto `lane` and drops it.
    pub fn drag_last_project_onto(&mut self, lane: LaneKind) -> Result<(), eyre::Report> {
        let id = self
            .last_project
            .ok_or_else(|| eyre::eyre!("missing created project in scenario world"))?;
        self.notifications_before_drop = self.notifications.get();

        let moved = {
            let card = self
                .board
                .lanes()
                .iter()
                .find_map(|candidate| candidate.card(id))
                .ok_or_else(|| eyre::eyre!("no lane shows a card for {id}"))?;
            let target = self
                .board
                .lane(lane)
                .ok_or_else(|| eyre::eyre!("board has no {lane} lane"))?;

            let mut gesture = DragGesture::new();
            gesture.start(&card);
            gesture.hover(target);
            let moved = gesture.drop_on(target);
            gesture.end(&card);
            gesture.finish();
            moved
        };

        self.last_drop_moved = Some(moved);
        Ok(())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Builds a description of exactly `length` characters.
#[must_use]
pub fn description_of(length: usize) -> String {
    "lorem ipsum "
        .chars()
        .cycle()
        .take(length)
        .collect()
}
