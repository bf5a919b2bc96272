//! Process-wide tracing bootstrap.
//!
//! The board emits `tracing` events from the store and the drag handlers.
//! [`init_tracing`] installs a formatting subscriber for them once per
//! process.

use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

static ACTIVE_FILTER: Mutex<Option<String>> = Mutex::new(None);

/// Errors returned while installing the tracing subscriber.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// The filter directives could not be parsed.
    #[error("invalid tracing filter '{filter}': {reason}")]
    InvalidFilter {
        /// Rejected directives.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// Tracing was already initialised with different directives.
    #[error("tracing already initialised with '{active}'; refusing to switch to '{requested}'")]
    AlreadyInitialised {
        /// Directives currently installed.
        active: String,
        /// Directives requested by the caller.
        requested: String,
    },

    /// Another global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a `fmt` subscriber filtered by `filter` directives.
///
/// Repeated calls with the same directives succeed without reinstalling.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] for malformed directives,
/// [`LoggingError::AlreadyInitialised`] when different directives are already
/// active, and [`LoggingError::Install`] when another subscriber owns the
/// global slot.
pub fn init_tracing(filter: &str) -> Result<(), LoggingError> {
    let requested = filter.trim();
    let mut active = ACTIVE_FILTER
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(current) = active.as_deref() {
        if current == requested {
            return Ok(());
        }
        return Err(LoggingError::AlreadyInitialised {
            active: current.to_owned(),
            requested: requested.to_owned(),
        });
    }

    let env_filter = EnvFilter::try_new(requested).map_err(|error| LoggingError::InvalidFilter {
        filter: requested.to_owned(),
        reason: error.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|error| LoggingError::Install(error.to_string()))?;

    *active = Some(requested.to_owned());
    tracing::info!(filter = requested, version = env!("CARGO_PKG_VERSION"), "tracing initialised");
    Ok(())
}
