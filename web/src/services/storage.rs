use gloo::storage::{LocalStorage, Storage};
use model::{StorageBackend, StoreError};

/// The browser's local storage as a [`StorageBackend`]. Single tab, single
/// writer; every save overwrites the whole blob.
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}
