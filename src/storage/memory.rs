//! In-memory snapshot storage.

use std::collections::HashMap;

use crate::error::Result;

use super::Storage;

/// Keeps snapshots in a map. Nothing survives the process; used by tests
/// and demo setups where the file backend would be noise.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, snapshot: &str) -> Result<()> {
        self.slots.insert(slot.to_string(), snapshot.to_string());
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        self.slots.remove(slot);
        Ok(())
    }
}
