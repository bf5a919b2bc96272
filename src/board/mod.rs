//! Project board: store, lanes, cards and the drag gesture between them.
//!
//! The module follows the hexagonal layout used across the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The project store and drag state machine in [`services`]
//! - Input validation in [`validation`]
//! - Headless views in [`views`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
pub mod views;

pub use config::{BoardConfig, DEFAULT_LANE_MIN_HEIGHT};

#[cfg(test)]
mod tests;
