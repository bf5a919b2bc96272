//! Board lanes.

use super::{ProjectDomainError, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two lanes on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneKind {
    /// Lane listing active projects.
    Active,
    /// Lane listing finished projects.
    Finished,
}

impl LaneKind {
    /// Every lane, in display order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Returns the canonical lane name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Returns the project status displayed by this lane.
    #[must_use]
    pub const fn status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    /// Returns the lane displaying projects with the given status.
    #[must_use]
    pub const fn for_status(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Active => Self::Active,
            ProjectStatus::Finished => Self::Finished,
        }
    }

    /// Returns the lane heading, e.g. `ACTIVE PROJECTS`.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }

    /// Returns the identifier of the lane container element.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Active => "active-projects",
            Self::Finished => "finished-projects",
        }
    }

    /// Returns the identifier of the list element holding the cards.
    #[must_use]
    pub const fn list_id(self) -> &'static str {
        match self {
            Self::Active => "active-projects-list",
            Self::Finished => "finished-projects-list",
        }
    }
}

impl TryFrom<&str> for LaneKind {
    type Error = ProjectDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ProjectDomainError::UnknownLane(value.to_owned())),
        }
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
