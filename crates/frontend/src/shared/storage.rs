//! Durable key-value storage for the saved form.
//!
//! The browser implementation goes through `window.localStorage`; tests use
//! the in-memory [`MemoryStorage`].

use wasm_bindgen::JsValue;
use web_sys::window;

use super::error::StorageError;

/// Key of the saved form record
pub const SAVED_FORM_KEY: &str = "savedForm";

pub trait FormStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any previous value under `key`
    fn write(&self, key: &str, data: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl FormStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(e)))
    }

    fn write(&self, key: &str, data: &str) -> Result<(), StorageError> {
        // QuotaExceededError lands here
        get_local_storage()?
            .set_item(key, data)
            .map_err(|e| StorageError::Write(js_message(e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(js_message(e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{FormStorage, StorageError};

    /// In-memory storage; `set_failing(true)` makes every write fail
    /// the way a full browser quota does.
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
        failing: Cell<bool>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.set(failing);
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl FormStorage for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.get(key))
        }

        fn write(&self, key: &str, data: &str) -> Result<(), StorageError> {
            if self.failing.get() {
                return Err(StorageError::Write("QuotaExceededError".to_string()));
            }
            self.items.borrow_mut().insert(key.to_string(), data.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if self.failing.get() {
                return Err(StorageError::Write("storage disabled".to_string()));
            }
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }
}
