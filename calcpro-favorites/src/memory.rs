//! In-memory store, for tests and previews

use std::sync::{Mutex, MutexGuard};

use crate::{FavoritesStore, StoreError};

/// Keeps the list in memory. Same contract as the file store, no disk.
#[derive(Default)]
pub struct MemoryStore {
    ids: Mutex<Vec<String>>,
}

impl MemoryStore {
    // The list stays valid even if a holder panicked, so a poisoned lock
    // is recovered rather than turning saves into silent no-ops.
    fn slot(&self) -> MutexGuard<'_, Vec<String>> {
        self.ids.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.slot().clone())
    }

    fn save(&self, ids: &[String]) -> Result<(), StoreError> {
        *self.slot() = ids.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_save_survives_a_poisoned_lock() {
        let store = Arc::new(MemoryStore::default());

        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.ids.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        store.save(&["a".into()]).unwrap();
        assert_eq!(store.load().unwrap(), vec!["a"]);
    }
}
