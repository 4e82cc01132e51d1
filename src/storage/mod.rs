//! Storage Layer
//!
//! Key-value persistence abstractions and implementations.

mod memory;
mod traits;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::MemoryStorage;
pub use traits::{StorageBackend, StorageError};
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;
