//! File-backed store: one JSON array in one file

use std::fs;
use std::path::{Path, PathBuf};

use crate::{FavoritesStore, StoreError, STORAGE_KEY};

/// Stores the favorites list as `<dir>/favorites.json`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        JsonFileStore {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let ids = serde_json::from_str(&raw)?;
        Ok(ids)
    }

    fn save(&self, ids: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(ids)?;
        fs::write(&self.path, raw)?;
        tracing::debug!(count = ids.len(), path = %self.path.display(), "saved favorites");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(test: &str) -> JsonFileStore {
        let dir = std::env::temp_dir()
            .join("calcpro-favorites-tests")
            .join(format!("{}-{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        JsonFileStore::new(dir)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let store = scratch_store("missing");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = scratch_store("round-trip");
        let ids = vec!["shiva-aarti".to_string(), "datta-bavani".to_string()];

        store.save(&ids).unwrap();
        assert_eq!(store.load().unwrap(), ids);
    }

    #[test]
    fn test_save_replaces_whole_list() {
        let store = scratch_store("replace");
        store.save(&["a".into(), "b".into()]).unwrap();
        store.save(&["c".into()]).unwrap();
        assert_eq!(store.load().unwrap(), vec!["c"]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let store = scratch_store("corrupt");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }
}
