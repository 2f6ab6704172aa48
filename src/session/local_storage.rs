use web_sys::Storage;

use super::StorageBackend;

/// Browser localStorage. The handle is re-acquired on every call, so each
/// operation degrades to a no-op when no window is available.
#[derive(Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = Self::storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(key);
        }
    }
}
