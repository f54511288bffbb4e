use super::backend::StorageBackend;
use crate::error::{Result, UserbookError};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since userbook is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose file already exists with the given raw content.
    pub fn with_content(content: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.content.borrow_mut() = Some(content.into());
        backend
    }

    /// Raw content as last written.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.content.borrow().clone())
    }

    fn write(&self, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(UserbookError::Store("Simulated write error".to_string()));
        }
        *self.content.borrow_mut() = Some(content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.content.borrow().is_some()
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://usuarios.json")
    }
}
