//! In-memory drag transfer channel.

use crate::board::{domain::DropEffect, ports::DataTransfer};

/// Transfer channel backed by a vector of format/payload pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryDataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
}

impl InMemoryDataTransfer {
    /// Creates an empty transfer channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a channel already carrying `data` under `format`.
    ///
    /// Useful for simulating payloads published by foreign drag sources.
    #[must_use]
    pub fn with_data(format: &str, data: &str) -> Self {
        let mut transfer = Self::new();
        transfer.set_data(format, data);
        transfer
    }

    /// Returns `true` when no payload is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DataTransfer for InMemoryDataTransfer {
    fn set_data(&mut self, format: &str, data: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == format) {
            data.clone_into(&mut entry.1);
            return;
        }
        self.entries.push((format.to_owned(), data.to_owned()));
    }

    fn get_data(&self, format: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(key, _)| key == format)
            .map(|(_, data)| data.clone())
    }

    fn types(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }

    fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    fn clear_data(&mut self) {
        self.entries.clear();
        self.effect_allowed = DropEffect::None;
    }
}
