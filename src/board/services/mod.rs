//! Service layer for the project board.

pub mod drag;
pub mod store;

pub use drag::DragGesture;
pub use store::{ProjectListener, ProjectStore, Subscription, SubscriptionId};
