use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::RwLock;

/// Key holding the JSON-serialized cart.
pub const CART_KEY: &str = "schoolPrintCart";

/// Key holding the persisted `light`/`dark` theme choice.
pub const THEME_KEY: &str = "theme";

/// String-keyed persistent storage that survives page reloads.
///
/// Writes are synchronous from the caller's point of view. Implementations
/// shared between tabs give last-write-wins semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Store that remembers nothing. Used when the browser has storage disabled.
#[derive(Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut guard) = store.entries.write() {
            guard.insert(key.to_owned(), value.to_owned());
        }
        store
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self.entries.read().map_err(|_| anyhow!("store lock poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self.entries.write().map_err(|_| anyhow!("store lock poisoned"))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut guard = self.entries.write().map_err(|_| anyhow!("store lock poisoned"))?;
        guard.remove(key);
        Ok(())
    }
}
