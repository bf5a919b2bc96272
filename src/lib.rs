//! Lanebook: a headless two-lane project board.
//!
//! Projects are created through a validated form, shown in an active and a
//! finished lane, and moved between lanes by dragging their cards.
//!
//! # Architecture
//!
//! Lanebook follows hexagonal architecture principles:
//!
//! - **Domain**: Projects, lanes and drag vocabulary with no infrastructure
//! - **Ports**: The drag transfer channel and the drag source/target roles
//! - **Adapters**: Concrete transfer channels
//! - **Services**: The project store and the drag gesture state machine
//!
//! # Modules
//!
//! - [`board`]: Project store, lanes, cards and drag-and-drop
//! - [`logging`]: Tracing subscriber bootstrap

pub mod board;
pub mod logging;
