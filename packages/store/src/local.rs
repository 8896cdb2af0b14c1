//! # Browser local storage backend
//!
//! [`LocalStorage`] implements [`KeyValueStorage`] over `window.localStorage`
//! through `web-sys`. It is what the web build uses so the session survives
//! reloads and is visible to other tabs on the same origin.
//!
//! The handle is a zero-size struct. The `Storage` object is looked up on
//! every call.
//!
//! Errors never reach the caller. Failed writes and removals are logged. An
//! unavailable storage (disabled cookies, private mode quotas) reads as empty
//! and ignores writes, so the app starts signed out.

use crate::storage::KeyValueStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "local storage unavailable, value not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!(key, "local storage rejected write");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "local storage unavailable, value not removed");
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!(key, "local storage rejected removal");
        }
    }
}
