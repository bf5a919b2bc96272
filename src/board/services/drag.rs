//! Drag-and-drop lane transfer state machine.
//!
//! A [`DragGesture`] owns the transfer channel of one gesture and walks a
//! card and a lane through the handshake:
//!
//! ```text
//! Idle -> Dragging -> Hovering -> Dropped -> Ended -> Idle
//!            |           |                    ^
//!            +-----------+--------------------+
//! ```
//!
//! Events that arrive out of order are ignored and leave the phase as it
//! was.

use crate::board::{
    adapters::memory::InMemoryDataTransfer,
    domain::{DragOverOutcome, DragPhase},
    ports::{DataTransfer, DragSource, DropTarget},
};
use tracing::trace;

/// One drag gesture between a card and a lane.
#[derive(Debug, Default)]
pub struct DragGesture<T = InMemoryDataTransfer>
where
    T: DataTransfer,
{
    transfer: T,
    phase: DragPhase,
}

impl DragGesture<InMemoryDataTransfer> {
    /// Creates an idle gesture over an empty in-memory channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> DragGesture<T>
where
    T: DataTransfer,
{
    /// Creates an idle gesture over the given transfer channel.
    pub const fn with_transfer(transfer: T) -> Self {
        Self {
            transfer,
            phase: DragPhase::Idle,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns the transfer channel.
    #[must_use]
    pub const fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Starts dragging `source`.
    ///
    /// A finished gesture is reset to idle first. Starting while a gesture
    /// is still in flight is ignored.
    pub fn start(&mut self, source: &impl DragSource) -> DragPhase {
        if self.phase.is_finished() {
            self.finish();
        }
        if self.phase != DragPhase::Idle {
            trace!(phase = ?self.phase, "drag start ignored");
            return self.phase;
        }

        let project_id = source.on_drag_start(&mut self.transfer);
        self.transition(DragPhase::Dragging { project_id })
    }

    /// Passes the gesture over `target`.
    ///
    /// Returns the target's answer. A rejected gesture keeps its phase.
    pub fn hover(&mut self, target: &impl DropTarget) -> DragOverOutcome {
        let project_id = match self.phase {
            DragPhase::Dragging { project_id } | DragPhase::Hovering { project_id, .. } => {
                project_id
            }
            _ => {
                trace!(phase = ?self.phase, "drag over ignored");
                return DragOverOutcome::Reject;
            }
        };

        let outcome = target.on_drag_over(&self.transfer);
        if outcome.is_accepted() {
            self.transition(DragPhase::Hovering {
                project_id,
                lane: target.lane(),
            });
        }
        outcome
    }

    /// Drops the gesture on `target`.
    ///
    /// Only a lane that accepted the gesture receives the drop. Returns
    /// `true` when the drop changed the project's status.
    pub fn drop_on(&mut self, target: &impl DropTarget) -> bool {
        let DragPhase::Hovering { project_id, lane } = self.phase else {
            trace!(phase = ?self.phase, "drop ignored");
            return false;
        };
        if lane != target.lane() {
            trace!(hovered = %lane, target = %target.lane(), "drop ignored on lane not hovered");
            return false;
        }

        let moved = target.on_drop(&self.transfer);
        self.transition(DragPhase::Dropped { project_id, lane });
        moved
    }

    /// Leaves `target`, reverting the lane hints.
    pub fn leave(&mut self, target: &impl DropTarget) -> DragPhase {
        if self.phase == DragPhase::Idle {
            return self.phase;
        }
        target.on_drag_leave();
        self.transition(DragPhase::Ended)
    }

    /// Ends the gesture on the source side.
    pub fn end(&mut self, source: &impl DragSource) -> DragPhase {
        if self.phase == DragPhase::Idle {
            return self.phase;
        }
        source.on_drag_end(&self.transfer);
        self.transition(DragPhase::Ended)
    }

    /// Returns a finished gesture to idle and clears the channel.
    ///
    /// Returns the phase the gesture finished in.
    pub fn finish(&mut self) -> DragPhase {
        let finished = self.phase;
        if finished.is_finished() {
            self.transfer.clear_data();
            self.transition(DragPhase::Idle);
        }
        finished
    }

    fn transition(&mut self, next: DragPhase) -> DragPhase {
        trace!(from = ?self.phase, to = ?next, "drag phase");
        self.phase = next;
        next
    }
}
