//! Key/value storage backends for state that must outlive a page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! These backends centralize the hydrate-only `localStorage` glue so stores
//! can persist through a small trait without repeating web-sys calls, and so
//! tests and server rendering can swap in an in-memory map.
//!
//! Writes are best-effort: a full or disabled `localStorage` is logged and
//! otherwise ignored.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key/value storage area.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove(&self, key: &str);

    /// Remove every key in the storage area.
    fn clear(&self);

    /// Load and decode a JSON value stored under `key`.
    ///
    /// Undecodable values are logged and treated as absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable storage entry {key}: {e}");
                None
            }
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T)
    where
        Self: Sized,
    {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw),
            Err(e) => log::warn!("failed to encode storage entry {key}: {e}"),
        }
    }
}

/// Browser `localStorage`. Outside the browser every operation is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write of {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.clear();
            }
        }
    }
}

/// Process-local storage backed by a shared map.
///
/// Clones share the same map, so a clone handed to a repository can be
/// inspected by the test that created it.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }

    fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
