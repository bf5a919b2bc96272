//! Roles a view can take in a drag gesture.

use crate::board::domain::{DragOverOutcome, LaneKind, ProjectId};

use super::DataTransfer;

/// A view that can be picked up and dragged.
pub trait DragSource {
    /// Handles the start of a drag by publishing the payload on `transfer`.
    ///
    /// Returns the project carried by the gesture.
    fn on_drag_start(&self, transfer: &mut dyn DataTransfer) -> ProjectId;

    /// Handles the end of a drag on the source side.
    fn on_drag_end(&self, transfer: &dyn DataTransfer);
}

/// A view that projects can be dropped onto.
pub trait DropTarget {
    /// Returns the lane this target represents.
    fn lane(&self) -> LaneKind;

    /// Handles a drag passing over the target.
    ///
    /// Returns [`DragOverOutcome::Reject`] without side effects when the
    /// payload is not a project identifier.
    fn on_drag_over(&self, transfer: &dyn DataTransfer) -> DragOverOutcome;

    /// Handles a drop on the target.
    ///
    /// Returns `true` when the drop changed a project's status.
    fn on_drop(&self, transfer: &dyn DataTransfer) -> bool;

    /// Handles the gesture leaving or ending over the target.
    fn on_drag_leave(&self);
}
