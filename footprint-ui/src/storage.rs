//! Browser storage port
//!
//! `StoragePort` implementation over `window.localStorage`. The whole
//! persisted state of the app is one string slot under the history key.

use footprint::{LedgerError, LedgerResult, StoragePort};
use web_sys::Storage;

/// `localStorage`-backed storage port
#[derive(Debug, Clone, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        BrowserStore
    }

    fn local_storage(&self) -> LedgerResult<Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| LedgerError::Storage("localStorage unavailable".to_string()))
    }
}

impl StoragePort for BrowserStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let storage = self.local_storage()?;
        storage
            .get_item(key)
            .map_err(|_| LedgerError::Storage(format!("failed to read key {key}")))
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        let storage = self.local_storage()?;
        storage
            .set_item(key, value)
            .map_err(|_| LedgerError::Storage(format!("failed to write key {key}")))
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        let storage = self.local_storage()?;
        storage
            .remove_item(key)
            .map_err(|_| LedgerError::Storage(format!("failed to delete key {key}")))
    }
}
