//! Client-side session cache: token pair plus the signed-in profile.
//!
//! Storage is behind a small key-value trait so the web build persists to
//! browser localStorage while tests and the desktop build run against an
//! in-memory map.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::models::{AuthTokens, User};

#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

pub const ACCESS_TOKEN_KEY: &str = "eras_access_token";
pub const REFRESH_TOKEN_KEY: &str = "eras_refresh_token";
pub const USER_KEY: &str = "eras_user";

pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }
}

#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        SessionStore { backend }
    }

    pub fn in_memory() -> Self {
        SessionStore::new(Arc::new(MemoryStorage::default()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        SessionStore::new(Arc::new(LocalStorage))
    }

    pub fn save_tokens(&self, tokens: &AuthTokens) {
        self.backend.set(ACCESS_TOKEN_KEY, &tokens.access);
        self.backend.set(REFRESH_TOKEN_KEY, &tokens.refresh);
    }

    pub fn access_token(&self) -> Option<String> {
        self.backend.get(ACCESS_TOKEN_KEY)
    }

    /// Stored for completeness; no renewal flow uses it. An expired access
    /// token surfaces as a 401 on the next call and forces re-login.
    #[allow(dead_code)]
    pub fn refresh_token(&self) -> Option<String> {
        self.backend.get(REFRESH_TOKEN_KEY)
    }

    pub fn save_user(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.backend.set(USER_KEY, &raw);
        }
    }

    /// Returns None for a missing or malformed record, never an error.
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn clear(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

// Process-wide session instance
static SESSION: OnceLock<SessionStore> = OnceLock::new();

pub fn init_session(store: SessionStore) {
    let _ = SESSION.set(store);
}

pub fn session() -> &'static SessionStore {
    SESSION
        .get()
        .expect("Session store not initialized. Call init_session first.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            phone: "+251900000000".to_string(),
            full_name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            role: Role::Admin,
            profile_image: None,
            station: None,
        }
    }

    #[test]
    fn user_round_trips_through_storage() {
        let store = SessionStore::in_memory();
        let user = sample_user();

        store.save_user(&user);
        assert_eq!(store.user(), Some(user));
    }

    #[test]
    fn clear_removes_all_three_keys() {
        let backend = Arc::new(MemoryStorage::default());
        let store = SessionStore::new(backend.clone());
        store.save_tokens(&AuthTokens {
            access: "acc".to_string(),
            refresh: "ref".to_string(),
        });
        store.save_user(&sample_user());

        store.clear();

        assert!(backend.get(ACCESS_TOKEN_KEY).is_none());
        assert!(backend.get(REFRESH_TOKEN_KEY).is_none());
        assert!(backend.get(USER_KEY).is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn malformed_user_record_reads_as_none() {
        let backend = Arc::new(MemoryStorage::default());
        let store = SessionStore::new(backend.clone());
        backend.set(USER_KEY, "{not json");

        assert!(store.user().is_none());
    }

    #[test]
    fn authenticated_tracks_access_token_only() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());

        store.save_tokens(&AuthTokens {
            access: "acc".to_string(),
            refresh: "ref".to_string(),
        });
        assert!(store.is_authenticated());
        assert_eq!(store.access_token().as_deref(), Some("acc"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref"));
    }
}
