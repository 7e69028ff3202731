//! Durable slot for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private browsing modes and full quotas make `localStorage` fail in ways the
//! rest of the client should never see. `TokenStore` absorbs every backend
//! failure: reads degrade to "no token" and writes become logged no-ops.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::config::TOKEN_STORAGE_KEY;
use crate::error::StorageError;

/// Key/value storage the token slot sits on.
pub trait StorageBackend {
    /// Read the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage area is unavailable or the read fails.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage area is unavailable or the write fails.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage area is unavailable or the removal fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Unavailable outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Backend(format!("{e:?}"))),
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local storage for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().remove(key);
        Ok(())
    }
}

/// The token slot: `get`, `set`, `clear`, none of which can fail.
#[derive(Debug, Clone)]
pub struct TokenStore<B> {
    backend: B,
    key: &'static str,
}

impl<B: StorageBackend> TokenStore<B> {
    /// Token slot at the standard storage key.
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, TOKEN_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: &'static str) -> Self {
        Self { backend, key }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Stored token, or `None` when absent, empty or unreadable.
    pub fn get(&self) -> Option<String> {
        match self.backend.read(self.key) {
            Ok(Some(token)) if !token.trim().is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                log::warn!("token store: read of {} failed: {e}", self.key);
                None
            }
        }
    }

    pub fn set(&self, token: &str) {
        if let Err(e) = self.backend.write(self.key, token) {
            log::warn!("token store: write of {} failed: {e}", self.key);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(self.key) {
            log::warn!("token store: clear of {} failed: {e}", self.key);
        }
    }
}
