//! Ordered Entry Storage
//!
//! Keeps entries sorted by start time. New entries are inserted after every
//! existing entry with an equal start time, so ties keep insertion order.

use std::cmp::Ordering;

use super::entry::{Entry, EntryType};

/// Entries sorted non-decreasing by `start_time`.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry at its sorted position and returns its index.
    pub fn insert(&mut self, entry: Entry) -> usize {
        let index = self
            .entries
            .partition_point(|e| e.start_time.total_cmp(&entry.start_time) != Ordering::Greater);
        self.entries.insert(index, entry);
        index
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the last stored entry with the given name.
    pub fn last_named(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().rev().find(|e| e.name == name)
    }

    pub fn iter_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.name == name)
    }

    pub fn iter_typed(&self, entry_type: EntryType) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |e| e.entry_type == entry_type)
    }

    /// Removes every entry of the given type, returning how many were removed.
    pub fn remove_type(&mut self, entry_type: EntryType) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.entry_type != entry_type);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
