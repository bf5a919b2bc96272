//! Transfer channel port carrying the payload of a drag gesture.

use crate::board::domain::DropEffect;

/// Platform channel shared by the source and the target of one drag gesture.
///
/// The channel stores at most one payload per format, remembers the order
/// in which formats were first written and carries the effect the source
/// allows.
#[cfg_attr(test, mockall::automock)]
pub trait DataTransfer {
    /// Stores `data` under `format`, replacing any previous payload.
    fn set_data(&mut self, format: &str, data: &str);

    /// Returns the payload stored under `format`.
    fn get_data(&self, format: &str) -> Option<String>;

    /// Returns the stored formats in the order they were first written.
    fn types(&self) -> Vec<String>;

    /// Sets the effect the drag source allows.
    fn set_effect_allowed(&mut self, effect: DropEffect);

    /// Returns the effect the drag source allows.
    fn effect_allowed(&self) -> DropEffect;

    /// Removes every payload and resets the allowed effect.
    fn clear_data(&mut self);
}
