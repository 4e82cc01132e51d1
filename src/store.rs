//! Checklist Store
//!
//! Owns the checklist, the numeric context, and a storage backend. Every
//! state-changing operation writes the full serialized checklist back to
//! storage under a fixed key, including when the transform left the state
//! unchanged. Guarded no-ops (empty input, nothing selected) skip the write.
//!
//! Data-layer operations never raise: bad persisted state loads as empty,
//! and a failing backend write is logged and swallowed.

use log::{error, warn};

use crate::context::NumericContext;
use crate::domain::{Category, Checklist};
use crate::export::ExportFile;
use crate::markdown;
use crate::storage::StorageBackend;

/// Fixed storage key for the serialized category list
pub const STORAGE_KEY: &str = "categories";

/// Write-through checklist store, the surface the UI collaborator drives
pub struct ChecklistStore<S: StorageBackend> {
    checklist: Checklist,
    backend: S,
    context: NumericContext,
}

impl<S: StorageBackend> ChecklistStore<S> {
    /// Load persisted state from the backend.
    ///
    /// Absent, unreadable, or malformed values fall back to an empty
    /// checklist; loading never fails.
    pub fn load(backend: S) -> Self {
        let checklist = match backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Checklist>(&raw) {
                Ok(checklist) => checklist,
                Err(err) => {
                    warn!("discarding malformed persisted checklist: {}", err);
                    Checklist::new()
                }
            },
            Ok(None) => Checklist::new(),
            Err(err) => {
                warn!("storage read failed, starting empty: {}", err);
                Checklist::new()
            }
        };
        Self {
            checklist,
            backend,
            context: NumericContext::new(),
        }
    }

    /// Current categories in stored (insertion) order
    pub fn categories(&self) -> &[Category] {
        &self.checklist.categories
    }

    /// The global number formulas resolve against
    pub fn number(&self) -> i64 {
        self.context.value()
    }

    pub fn set_number(&mut self, value: i64) {
        self.context.set(value);
    }

    /// Append a category. No-op when the name trims empty.
    pub fn add_category(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.checklist.add_category(name.to_string());
        self.persist();
    }

    /// Append one category per comma-separated piece, dropping empties
    pub fn bulk_add_categories(&mut self, text: &str) {
        self.checklist.bulk_add_categories(text);
        self.persist();
    }

    /// Append an item to every category named `category_name`.
    ///
    /// No-op when no category is selected or the text trims empty. The item
    /// keeps the text as given, untrimmed.
    pub fn add_item(&mut self, category_name: &str, item_text: &str) {
        if category_name.is_empty() || item_text.trim().is_empty() {
            return;
        }
        self.checklist.add_item(category_name, item_text);
        self.persist();
    }

    /// Append one item per comma-separated piece to every matching category.
    /// No-op when no category is selected or the text trims empty.
    pub fn bulk_add_items(&mut self, category_name: &str, text: &str) {
        if category_name.is_empty() || text.trim().is_empty() {
            return;
        }
        self.checklist.bulk_add_items(category_name, text);
        self.persist();
    }

    /// Remove every matching item from every matching category.
    /// Persists even when nothing matched.
    pub fn remove_item(&mut self, category_name: &str, item_name: &str) {
        self.checklist.remove_item(category_name, item_name);
        self.persist();
    }

    /// Flip `done` on every matching item in every matching category.
    /// Persists even when nothing matched.
    pub fn toggle_item_done(&mut self, category_name: &str, item_name: &str) {
        self.checklist.toggle_item_done(category_name, item_name);
        self.persist();
    }

    /// Replace the whole category list (markdown import lands here)
    pub fn replace_all(&mut self, categories: Vec<Category>) {
        self.checklist.replace_all(categories);
        self.persist();
    }

    /// Render the current state as a downloadable markdown file
    pub fn export_markdown(&self) -> ExportFile {
        let contents = markdown::encode(&self.checklist.categories, self.context.value());
        ExportFile::new(contents)
    }

    /// Decode markdown text and replace the checklist with the result
    pub fn import_markdown(&mut self, text: &str) {
        let categories = markdown::decode(text);
        self.replace_all(categories);
    }

    /// Write through to storage; failures are logged, never surfaced
    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.checklist) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!("checklist serialization failed: {}", err);
                return;
            }
        };
        if let Err(err) = self.backend.set(STORAGE_KEY, &serialized) {
            error!("checklist write failed: {}", err);
        }
    }
}
