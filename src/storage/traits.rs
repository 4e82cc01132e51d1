//! Storage Layer - Core Trait
//!
//! Defines the abstract key-value interface the checklist persists through.
//! Implementations can use browser localStorage, in-memory maps, etc.

use std::fmt;

/// Synchronous key-value store holding the serialized checklist
///
/// The store writes the whole serialized state under one fixed key after
/// every mutation; there are no transactions and no schema versioning.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store cannot be reached (no window, storage access denied)
    Unavailable(String),
    /// The backing store rejected the operation (quota exceeded, etc.)
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
            StorageError::Backend(msg) => write!(f, "storage backend error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
