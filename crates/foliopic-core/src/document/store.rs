//! Persistence seam for the portfolio document.
//!
//! The document lives in a key-value store under a single key. In the
//! browser that store is localStorage and stays on the host side; the core
//! only defines the contract and the load/save/reset flow over it, with an
//! in-memory implementation for tests and native callers.

use std::collections::HashMap;

use super::{DocumentError, PortfolioDocument};

/// Storage key both pages read and write.
pub const STORAGE_KEY: &str = "portfolio_data";

/// A string key-value store, the shape of web storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Load the stored document, if any.
///
/// Returns `Ok(None)` when nothing is stored. A stored but unparsable
/// document is an error, surfaced so the caller can decide to fall back to
/// defaults or to keep the stored bytes for inspection.
pub fn load_document(store: &impl KeyValueStore) -> Result<Option<PortfolioDocument>, DocumentError> {
    match store.get(STORAGE_KEY) {
        Some(json) => Ok(Some(PortfolioDocument::from_json(&json)?)),
        None => Ok(None),
    }
}

/// Serialize the document and overwrite the stored copy.
pub fn save_document(
    store: &mut impl KeyValueStore,
    document: &PortfolioDocument,
) -> Result<(), DocumentError> {
    let json = document.to_json()?;
    store.set(STORAGE_KEY, &json);
    Ok(())
}

/// Drop the stored document and return a fresh default.
pub fn reset_document(store: &mut impl KeyValueStore) -> PortfolioDocument {
    store.remove(STORAGE_KEY);
    PortfolioDocument::default()
}

/// In-memory store for tests and native callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
