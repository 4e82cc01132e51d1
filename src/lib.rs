//! Check-All Core
//!
//! Data core for a browser-based checklist manager. Layered architecture:
//! - domain: Core entities and checklist transforms
//! - storage: Key-value persistence abstractions and implementations
//! - store: Write-through checklist store driven by the UI
//! - formula / markdown / export: Label templating and the markdown bridge
//!
//! The UI shell (forms, tables, file pickers, download wiring) lives outside
//! this crate and talks to [`ChecklistStore`].

pub mod context;
pub mod domain;
pub mod export;
pub mod formula;
pub mod import;
pub mod markdown;
pub mod storage;
pub mod store;

pub use context::NumericContext;
pub use domain::{Category, Checklist, Item};
pub use export::ExportFile;
#[cfg(target_arch = "wasm32")]
pub use import::{read_file_text, ImportError};
pub use import::{ImportGuard, ImportToken};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, StorageBackend, StorageError};
pub use store::{ChecklistStore, STORAGE_KEY};
