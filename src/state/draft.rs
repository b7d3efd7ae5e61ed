//! Create-Form Draft Cache
//!
//! One process-wide slot (a fixed key) holding the in-progress create form,
//! so closing the modal by accident loses nothing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::form::TaskFormValues;

/// String key-value slot store
pub trait DraftStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; silently empty when the browser offers none
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDraftStorage;

impl BrowserDraftStorage {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn storage() -> Option<web_sys::Storage> {
        None
    }
}

impl DraftStorage for BrowserDraftStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("[DRAFT] localStorage rejected write of {}", key);
                }
            }
            None => log::warn!("[DRAFT] no localStorage, draft not saved"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory slots, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl DraftStorage for MemoryDraftStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}

#[derive(Debug, Clone)]
pub struct DraftCache<S: DraftStorage> {
    storage: S,
    key: String,
}

impl<S: DraftStorage> DraftCache<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Stored draft, if any. A draft that fails to parse is removed.
    pub fn load(&self) -> Option<TaskFormValues> {
        let raw = self.storage.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(values) => Some(values),
            Err(e) => {
                log::warn!("[DRAFT] discarding unreadable draft: {}", e);
                self.storage.remove(&self.key);
                None
            }
        }
    }

    pub fn save(&self, values: &TaskFormValues) {
        match serde_json::to_string(values) {
            Ok(json) => self.storage.set(&self.key, &json),
            Err(e) => log::error!("[DRAFT] could not serialize draft: {}", e),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(&self.key);
    }
}
