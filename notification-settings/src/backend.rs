//! Key-value storage the settings store reads from and writes to.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Errors from a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The storage area doesn't exist or has been disabled.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// An underlying error from JS, such as a quota error on write.
    #[error("Error from JS: {0}")]
    Js(String),
}

/// Synchronous string storage, such as the browser's `localStorage`.
pub trait SettingsBackend {
    /// Gets the raw value stored at `key`, or `None` if nothing is stored there.
    fn read(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Replaces the value stored at `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), BackendError>;
}

/// In-memory backend. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with `value` already stored at `key`.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.entries.borrow_mut().insert(key.into(), value.into());
        backend
    }

    /// Gets a copy of the value currently stored at `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SettingsBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
