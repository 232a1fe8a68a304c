//! In-memory collection of training entries for the current session.

use std::collections::HashMap;

use thiserror::Error;

use super::types::{EntryId, TrainingEntry};

/// Errors from the entry store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An entry with this id is already stored
    #[error("Duplicate entry id: {0}")]
    DuplicateId(EntryId),
}

/// Full, unfiltered list of entries in load/creation order.
///
/// Ids are unique; filtering never touches the store.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<TrainingEntry>,
    /// Position of each id in `entries`
    index: HashMap<EntryId, usize>,
}

impl EntryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh bulk load, keeping the first
    /// entry for any repeated id.
    ///
    /// Returns the number of entries dropped because their id repeated.
    pub fn replace_all(&mut self, entries: Vec<TrainingEntry>) -> usize {
        self.entries.clear();
        self.index.clear();

        let mut dropped = 0;
        for entry in entries {
            if self.index.contains_key(&entry.id) {
                tracing::warn!("Dropping entry with duplicate id {}", entry.id);
                dropped += 1;
            } else {
                self.push(entry);
            }
        }
        dropped
    }

    /// Append a newly created entry.
    pub fn insert(&mut self, entry: TrainingEntry) -> Result<(), StoreError> {
        if self.index.contains_key(&entry.id) {
            return Err(StoreError::DuplicateId(entry.id));
        }
        self.push(entry);
        Ok(())
    }

    fn push(&mut self, entry: TrainingEntry) {
        self.index.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &EntryId) -> Option<&TrainingEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Whether an id is stored.
    pub fn contains(&self, id: &EntryId) -> bool {
        self.index.contains_key(id)
    }

    /// All entries in order.
    pub fn entries(&self) -> &[TrainingEntry] {
        &self.entries
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
