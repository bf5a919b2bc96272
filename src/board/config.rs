//! Board configuration.

use super::{domain::LaneKind, validation::ProjectFormConfig};

/// Minimum height, in pixels, applied to lanes while a card is dragged.
pub const DEFAULT_LANE_MIN_HEIGHT: u32 = 200;

/// Settings used to assemble a [`Board`](super::views::Board).
///
/// # Examples
///
/// ```
/// use lanebook::board::{BoardConfig, domain::LaneKind};
///
/// let config = BoardConfig::default().with_lane_min_height(320);
/// assert_eq!(config.lane_min_height, 320);
/// assert_eq!(config.lanes, vec![LaneKind::Active, LaneKind::Finished]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Lanes to build, in display order.
    pub lanes: Vec<LaneKind>,
    /// Minimum lane height while a drag hovers the board.
    pub lane_min_height: u32,
    /// Constraints of the project form.
    pub form: ProjectFormConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            lanes: LaneKind::ALL.to_vec(),
            lane_min_height: DEFAULT_LANE_MIN_HEIGHT,
            form: ProjectFormConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Sets the minimum lane height used while dragging.
    #[must_use]
    pub const fn with_lane_min_height(mut self, pixels: u32) -> Self {
        self.lane_min_height = pixels;
        self
    }

    /// Sets the project form constraints.
    #[must_use]
    pub const fn with_form(mut self, form: ProjectFormConfig) -> Self {
        self.form = form;
        self
    }
}
