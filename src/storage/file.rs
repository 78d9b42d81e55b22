//! File-backed snapshot storage.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;

use super::Storage;

/// Stores each slot as a JSON file under a base directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`. The directory is created
    /// lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the storage directory.
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl Storage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Save a snapshot using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern so a crash mid-write
    /// never leaves a half-written snapshot behind.
    fn write(&mut self, slot: &str, snapshot: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.slot_path(slot);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, snapshot)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("data"));

        storage.write("items", r#"[{"id":"1"}]"#).unwrap();

        let snapshot = storage.read("items").unwrap();
        assert_eq!(snapshot.as_deref(), Some(r#"[{"id":"1"}]"#));
    }

    #[test]
    fn read_missing_slot_returns_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("data"));

        assert!(storage.read("session").unwrap().is_none());
    }

    #[test]
    fn write_replaces_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("data"));

        storage.write("items", "[1]").unwrap();
        storage.write("items", "[1,2]").unwrap();

        assert_eq!(storage.read("items").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("data"));

        storage.write("items", "[]").unwrap();

        let temp_path = temp.path().join("data").join("items.json.tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful write"
        );
    }

    #[test]
    fn remove_clears_slot() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("data"));

        storage.write("session", "{}").unwrap();
        storage.remove("session").unwrap();

        assert!(storage.read("session").unwrap().is_none());
    }

    #[test]
    fn remove_absent_slot_succeeds() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("data"));

        storage.remove("session").unwrap();
        storage.remove("session").unwrap();
    }

    #[test]
    fn slots_are_independent() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("data"));

        storage.write("items", "[]").unwrap();
        storage.write("session", "{}").unwrap();
        storage.remove("session").unwrap();

        assert!(storage.read("items").unwrap().is_some());
        assert!(storage.read("session").unwrap().is_none());
    }
}
