//! Vocabulary of a drag gesture between a card and a lane.

use super::{LaneKind, ProjectId};
use std::fmt;

/// Transfer format carrying the dragged project's identifier.
pub const PLAIN_TEXT_FORMAT: &str = "text/plain";

/// Operation a drag source allows on its payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DropEffect {
    /// No drop is allowed.
    #[default]
    None,
    /// The payload may be copied.
    Copy,
    /// The payload may be linked.
    Link,
    /// The payload may be moved.
    Move,
}

impl DropEffect {
    /// Returns the platform name of the effect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Link => "link",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for DropEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer of a lane to a drag passing over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverOutcome {
    /// The lane accepts a drop; the platform's default rejection is suppressed.
    Accept,
    /// The gesture does not carry a project and cannot be dropped here.
    Reject,
}

impl DragOverOutcome {
    /// Returns `true` when the drop is acceptable.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Minimum-height hint applied to lane containers during a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MinHeightHint {
    /// No minimum height.
    #[default]
    Collapsed,
    /// Minimum height in pixels.
    Expanded(u32),
}

impl MinHeightHint {
    /// Returns the hint as a CSS length.
    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::Collapsed => "0".to_owned(),
            Self::Expanded(pixels) => format!("{pixels}px"),
        }
    }
}

/// Phase of a single drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A card has started dragging and published its project identifier.
    Dragging {
        /// Project carried by the gesture.
        project_id: ProjectId,
    },
    /// The gesture is over a lane that accepted it.
    Hovering {
        /// Project carried by the gesture.
        project_id: ProjectId,
        /// Lane under the pointer.
        lane: LaneKind,
    },
    /// The gesture was dropped on a lane.
    Dropped {
        /// Project carried by the gesture.
        project_id: ProjectId,
        /// Lane that received the drop.
        lane: LaneKind,
    },
    /// The gesture ended without a drop, or the source finished cleaning up.
    Ended,
}

impl DragPhase {
    /// Returns the project carried by the gesture, if any.
    #[must_use]
    pub const fn project_id(self) -> Option<ProjectId> {
        match self {
            Self::Dragging { project_id }
            | Self::Hovering { project_id, .. }
            | Self::Dropped { project_id, .. } => Some(project_id),
            Self::Idle | Self::Ended => None,
        }
    }

    /// Returns `true` when the gesture has finished and may return to idle.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Dropped { .. } | Self::Ended)
    }
}
