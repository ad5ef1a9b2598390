//! Storage abstraction for document persistence.
//!
//! The editor core never touches a concrete storage API; hosts inject a
//! [`Storage`] implementation (in-memory, filesystem, or whatever key-value
//! store the platform offers).

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::{FileStorage, export_document};

use crate::document::NewspaperDocument;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for document storage backends.
pub trait Storage: Send + Sync {
    /// Save a document under a key.
    fn save(&self, key: &str, document: &NewspaperDocument) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the document stored under a key.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<NewspaperDocument>>;

    /// Delete the document stored under a key.
    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all stored keys.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a document exists under a key.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
