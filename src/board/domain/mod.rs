//! Domain model for the project board.
//!
//! The board domain models projects, their lane status, the two lanes that
//! display them and the vocabulary of a drag gesture. Rendering, event
//! plumbing and listener fan-out live outside this boundary.

mod drag;
mod error;
mod ids;
mod lane;
mod project;

pub use drag::{DragOverOutcome, DragPhase, DropEffect, MinHeightHint, PLAIN_TEXT_FORMAT};
pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::ProjectId;
pub use lane::LaneKind;
pub use project::{Project, ProjectStatus};
