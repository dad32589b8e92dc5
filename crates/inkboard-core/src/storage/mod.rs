//! Storage abstraction for persistence.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::page::Document;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for document storage backends.
///
/// Malformed persisted documents surface as
/// [`StorageError::Serialization`]; the decode failure belongs to the
/// caller, not to the drawing engine.
pub trait Storage: Send + Sync {
    /// Save a document under an identifier.
    fn save(&self, id: &str, document: &Document) -> StorageResult<()>;

    /// Load a document by identifier.
    fn load(&self, id: &str) -> StorageResult<Document>;

    /// Delete a document.
    fn delete(&self, id: &str) -> StorageResult<()>;

    /// List all stored document identifiers.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check whether a document exists.
    fn exists(&self, id: &str) -> StorageResult<bool>;
}
