//! Category Entity
//!
//! A named bucket owning an ordered list of items.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// A category and its items, in insertion order
///
/// Names are intended unique among categories but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<Item>,
}

impl Category {
    /// Create an empty category
    pub fn new(name: String) -> Self {
        Self {
            name,
            items: Vec::new(),
        }
    }
}
