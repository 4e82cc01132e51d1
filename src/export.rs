//! Export Policy
//!
//! Deterministic category ordering applied only when producing markdown
//! output, plus the metadata of the downloaded file. The stored order is
//! never touched.

use std::cmp::Ordering;

use crate::domain::Category;

/// Name of the downloaded markdown file
pub const EXPORT_FILE_NAME: &str = "categories.md";
/// MIME type of the downloaded markdown file
pub const EXPORT_MIME_TYPE: &str = "text/markdown";

/// A rendered export, ready for the UI collaborator to turn into a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    pub fn new(contents: String) -> Self {
        Self {
            name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            contents,
        }
    }
}

/// Categories in export order: item count descending, ties by ascending
/// name. Items inside each category keep their stored insertion order.
pub fn sorted_for_export(categories: &[Category]) -> Vec<&Category> {
    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by(|a, b| {
        b.items
            .len()
            .cmp(&a.items.len())
            .then_with(|| compare_names(&a.name, &b.name))
    });
    sorted
}

/// Case-insensitive comparison with the raw strings as tie-break.
/// Approximates locale collation without pulling in a collation library.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
