//! Item Entity
//!
//! A single checklist entry: a label template plus a completion flag.

use serde::{Deserialize, Serialize};

/// A checklist entry, addressed by name
///
/// `formula` holds the label template and equals `name` at creation time.
/// Tokens like `{number}` inside it are resolved at render/export time.
/// Names are NOT enforced unique: operations addressing an item by name
/// apply to every match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Name used for addressing
    pub name: String,
    /// Label template, resolved against the numeric context
    pub formula: String,
    /// Completion status
    pub done: bool,
}

impl Item {
    /// Create a new open item whose formula starts out equal to its name
    pub fn new(name: String) -> Self {
        Self {
            formula: name.clone(),
            name,
            done: false,
        }
    }

    /// Create an item with an explicit done flag (used by markdown decode)
    pub fn with_done(name: String, done: bool) -> Self {
        Self {
            formula: name.clone(),
            name,
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Buy milk".to_string());
        assert_eq!(item.name, "Buy milk");
        assert_eq!(item.formula, "Buy milk");
        assert!(!item.done);
    }

    #[test]
    fn test_item_with_done() {
        let item = Item::with_done("Laundry".to_string(), true);
        assert_eq!(item.formula, "Laundry");
        assert!(item.done);
    }
}
