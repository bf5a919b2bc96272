//! In-memory adapters for board ports.

mod transfer;

pub use transfer::InMemoryDataTransfer;
