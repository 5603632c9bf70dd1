// ============================================================================
// LOCAL STORAGE - Slot durable del token sobre gloo-storage
// ============================================================================

use gloo_storage::{LocalStorage, Storage};
use web_sys::window;

use crate::error::ClientError;
use crate::state::TokenStore;

/// localStorage accesible (puede faltar en modo privado o en iframes)
pub fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    /// None si el navegador no expone localStorage
    pub fn detect(key: &str) -> Option<Self> {
        get_local_storage()?;
        Some(Self {
            key: key.to_string(),
        })
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::get::<String>(&self.key).ok()
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        LocalStorage::set(&self.key, token).map_err(|e| ClientError::Storage(e.to_string()))
    }

    fn clear(&self) -> Result<(), ClientError> {
        LocalStorage::delete(&self.key);
        Ok(())
    }
}
