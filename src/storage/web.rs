//! Browser Local Storage
//!
//! [`StorageBackend`] implementation over `window.localStorage`.

use web_sys::Storage;

use super::traits::{StorageBackend, StorageError};

/// localStorage-backed store, bound once at construction
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Bind to `window.localStorage`.
    ///
    /// Fails when there is no window or the browser denies storage access
    /// (private-mode policies, storage disabled).
    pub fn new() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{:?}", err)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{:?}", err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{:?}", err)))
    }
}
