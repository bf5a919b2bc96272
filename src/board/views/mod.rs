//! Headless views of the project board.
//!
//! Views render markup through [`MarkupRenderer`] templates and receive
//! platform events as method calls. Lanes and cards take the drop target and
//! drag source roles of a drag gesture.

pub mod board;
pub mod card;
pub mod component;
pub mod form;
pub mod lane;
pub mod layout;
pub mod render;

pub use board::Board;
pub use card::ProjectCard;
pub use component::{Component, mount};
pub use form::ProjectInputForm;
pub use lane::LaneView;
pub use layout::LaneLayout;
pub use render::{CARD_TEMPLATE, LANE_TEMPLATE, MarkupRenderer, RenderError};
