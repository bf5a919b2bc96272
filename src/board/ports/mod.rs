//! Port contracts for the project board.
//!
//! Ports describe the platform's drag transfer channel and the two roles a
//! view can take in a drag gesture.

pub mod drag;
pub mod transfer;

pub use drag::{DragSource, DropTarget};
pub use transfer::DataTransfer;
