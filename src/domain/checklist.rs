//! Checklist Root
//!
//! The full ordered set of categories, and the transforms the store applies
//! to it. Name lookups are map-over-all-matching: when several categories or
//! items share a name, an operation applies to every match rather than the
//! first one.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::item::Item;

/// The root entity: every item belongs to exactly one category here
///
/// Serializes transparently as the category list, so the persisted JSON is a
/// plain array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    pub categories: Vec<Category>,
}

/// Split comma-separated user input into trimmed, non-empty pieces
fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|piece| !piece.is_empty())
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one empty category. The caller supplies a trimmed name.
    pub fn add_category(&mut self, name: String) {
        self.categories.push(Category::new(name));
    }

    /// Append one empty category per comma-separated piece, in split order
    pub fn bulk_add_categories(&mut self, text: &str) {
        for piece in split_list(text) {
            self.categories.push(Category::new(piece.to_string()));
        }
    }

    /// Append a new open item to every category named `category_name`
    pub fn add_item(&mut self, category_name: &str, item_text: &str) {
        for category in self.categories.iter_mut().filter(|c| c.name == category_name) {
            category.items.push(Item::new(item_text.to_string()));
        }
    }

    /// Append one item per comma-separated piece to every matching category
    pub fn bulk_add_items(&mut self, category_name: &str, text: &str) {
        let names: Vec<&str> = split_list(text).collect();
        for category in self.categories.iter_mut().filter(|c| c.name == category_name) {
            for name in &names {
                category.items.push(Item::new(name.to_string()));
            }
        }
    }

    /// Remove every item named `item_name` from every matching category
    pub fn remove_item(&mut self, category_name: &str, item_name: &str) {
        for category in self.categories.iter_mut().filter(|c| c.name == category_name) {
            category.items.retain(|item| item.name != item_name);
        }
    }

    /// Flip `done` on every matching item in every matching category
    pub fn toggle_item_done(&mut self, category_name: &str, item_name: &str) {
        for category in self.categories.iter_mut().filter(|c| c.name == category_name) {
            for item in category.items.iter_mut().filter(|item| item.name == item_name) {
                item.done = !item.done;
            }
        }
    }

    /// Wholesale replacement of the category list (markdown import)
    pub fn replace_all(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }
}
