//! Minimum-height hints shared by every lane on the board.

use crate::board::domain::{LaneKind, MinHeightHint};
use std::cell::RefCell;
use tracing::trace;

/// Shared hint state for the lane containers of one board.
///
/// A drag over any lane raises the hint on every registered lane, and a
/// leave reverts every lane.
#[derive(Debug)]
pub struct LaneLayout {
    expanded_min_height: u32,
    hints: RefCell<Vec<(LaneKind, MinHeightHint)>>,
}

impl LaneLayout {
    /// Creates a layout raising lanes to `expanded_min_height` pixels.
    #[must_use]
    pub const fn new(expanded_min_height: u32) -> Self {
        Self {
            expanded_min_height,
            hints: RefCell::new(Vec::new()),
        }
    }

    /// Registers a lane container with a collapsed hint.
    pub fn register(&self, lane: LaneKind) {
        let mut hints = self.hints.borrow_mut();
        if hints.iter().all(|(registered, _)| *registered != lane) {
            hints.push((lane, MinHeightHint::Collapsed));
        }
    }

    /// Raises the hint on every registered lane.
    pub fn expand_all(&self) {
        self.set_all(MinHeightHint::Expanded(self.expanded_min_height));
    }

    /// Reverts the hint on every registered lane.
    pub fn collapse_all(&self) {
        self.set_all(MinHeightHint::Collapsed);
    }

    /// Returns the current hint for `lane`.
    #[must_use]
    pub fn hint(&self, lane: LaneKind) -> MinHeightHint {
        self.hints
            .borrow()
            .iter()
            .find(|(registered, _)| *registered == lane)
            .map(|(_, hint)| *hint)
            .unwrap_or_default()
    }

    fn set_all(&self, hint: MinHeightHint) {
        trace!(hint = %hint.to_css(), "lane hints updated");
        for entry in self.hints.borrow_mut().iter_mut() {
            entry.1 = hint;
        }
    }
}
