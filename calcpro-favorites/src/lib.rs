//! CalcPro Favorites - Persisted favorites list
//!
//! One flat, ordered list of string content identifiers, stored as a JSON
//! array under a single fixed key. Every mutation is a full
//! read-modify-write replace: read the whole list, compute the new list,
//! write the whole list. There is exactly one writer (the active UI
//! context), so that replace cannot lose updates.
//!
//! The calculation engines never touch this store; it belongs to the
//! presentation layer alone.
//!
//! The format carries no schema version. Changing it breaks data saved by
//! older versions; that limitation is inherited and deliberate.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// The single fixed storage key.
pub const STORAGE_KEY: &str = "favorites";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access favorites storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt favorites data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Repository of favorite content identifiers.
pub trait FavoritesStore {
    /// The full list, in insertion order. A store with no saved data is an
    /// empty list, not an error.
    fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Replace the full list.
    fn save(&self, ids: &[String]) -> Result<(), StoreError>;

    fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.iter().any(|fid| fid == id))
    }

    /// Add the id if absent, remove it if present. Returns whether the id
    /// is a favorite afterwards. One atomic load/compute/save.
    fn toggle(&self, id: &str) -> Result<bool, StoreError> {
        let mut ids = self.load()?;
        match ids.iter().position(|fid| fid == id) {
            Some(index) => {
                ids.remove(index);
                self.save(&ids)?;
                Ok(false)
            }
            None => {
                ids.push(id.to_string());
                self.save(&ids)?;
                Ok(true)
            }
        }
    }
}
