use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded.
/// This keeps the `StorageBackend` trait on `&self`.
#[derive(Default)]
pub struct MemBackend {
    documents: RefCell<HashMap<String, String>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document, as if a previous session had saved it.
    pub fn with_document(self, key: &str, document: &str) -> Self {
        self.documents
            .borrow_mut()
            .insert(key.to_string(), document.to_string());
        self
    }

    /// The document currently stored under `key`.
    pub fn document(&self, key: &str) -> Option<String> {
        self.documents.borrow().get(key).cloned()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(ShelfError::Persistence("Simulated read error".to_string()));
        }
        Ok(self.documents.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, document: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Persistence("Simulated write error".to_string()));
        }
        self.documents
            .borrow_mut()
            .insert(key.to_string(), document.to_string());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
