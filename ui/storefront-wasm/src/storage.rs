//! `localStorage` adapter for the storage traits.

use anyhow::{Result, anyhow};
use gloo_storage::{LocalStorage, Storage};
use sp_storage::{KeyValueStore, NoopStore};
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::JsValue;

pub struct BrowserStore;

impl BrowserStore {
    /// `None` when the browser has `localStorage` disabled or unavailable.
    pub fn open() -> Option<Self> {
        gloo_utils::window().local_storage().ok().flatten().map(|_| Self)
    }
}

fn js_err(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{context}: {err:?}")
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| js_err("localStorage.getItem", e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| js_err("localStorage.setItem", e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::delete(key);
        Ok(())
    }
}

/// Session store: `localStorage` if usable, otherwise an in-page no-op.
pub fn page_store() -> Rc<dyn KeyValueStore> {
    match BrowserStore::open() {
        Some(store) => Rc::new(store),
        None => {
            warn!("localStorage unavailable, cart will not survive reloads");
            Rc::new(NoopStore)
        }
    }
}
