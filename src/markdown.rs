//! Markdown Checklist Codec
//!
//! Bidirectional mapping between the in-memory checklist and the
//! line-oriented markdown checklist format:
//!
//! ```text
//! ## Category
//! - [ ] open item
//! - [x] done item
//! ```
//!
//! Encoding resolves each item's formula to literal text, so a re-imported
//! export carries the resolved labels, not the original templates.

use std::fmt::Write;

use crate::domain::{Category, Item};
use crate::export;
use crate::formula;

const HEADER_PREFIX: &str = "## ";
const ITEM_OPEN_MARKER: &str = "- [ ]";
const ITEM_DONE_MARKER: &str = "- [x]";
/// Byte offset where an item label begins, one past the 5-byte marker
const ITEM_LABEL_OFFSET: usize = 6;

/// Render categories as markdown, in export-sort order, resolving each
/// item's formula against `number`. Items keep their stored order; one blank
/// line follows each category's items.
pub fn encode(categories: &[Category], number: i64) -> String {
    let mut out = String::new();
    for category in export::sorted_for_export(categories) {
        let _ = writeln!(out, "{}{}", HEADER_PREFIX, category.name);
        for item in &category.items {
            let marker = if item.done { ITEM_DONE_MARKER } else { ITEM_OPEN_MARKER };
            let label = formula::resolve(&item.formula, number);
            let _ = writeln!(out, "{} {}", marker, label);
        }
        out.push('\n');
    }
    out
}

/// Parse markdown text into a category list.
///
/// Line-oriented: `## ` starts a new category, `- [ ]`/`- [x]` adds an item
/// to the most recent one. Item lines before any header are dropped, and
/// unrecognized lines are ignored. The result replaces the checklist
/// wholesale; decode is never a merge.
pub fn decode(text: &str) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(HEADER_PREFIX) {
            categories.push(Category::new(rest.trim().to_string()));
        } else if let Some(done) = item_marker(line) {
            if let Some(current) = categories.last_mut() {
                let label = line.get(ITEM_LABEL_OFFSET..).unwrap_or("").trim();
                current.items.push(Item::with_done(label.to_string(), done));
            }
        }
    }
    categories
}

/// The done flag for an item line, or `None` for any other line
fn item_marker(line: &str) -> Option<bool> {
    if line.starts_with(ITEM_DONE_MARKER) {
        Some(true)
    } else if line.starts_with(ITEM_OPEN_MARKER) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Checklist;

    #[test]
    fn test_encode_format() {
        let mut checklist = Checklist::new();
        checklist.bulk_add_categories("Trip");
        checklist.add_item("Trip", "passport");
        checklist.add_item("Trip", "tickets");
        checklist.toggle_item_done("Trip", "tickets");

        let text = encode(&checklist.categories, 1);
        assert_eq!(text, "## Trip\n- [ ] passport\n- [x] tickets\n\n");
    }

    #[test]
    fn test_encode_resolves_formulas() {
        let mut checklist = Checklist::new();
        checklist.bulk_add_categories("Training");
        checklist.add_item("Training", "run {number*2} km");

        let text = encode(&checklist.categories, 5);
        assert!(text.contains("- [ ] run 10 km\n"));
    }

    #[test]
    fn test_encode_orders_by_export_policy() {
        let mut checklist = Checklist::new();
        checklist.bulk_add_categories("X,A,B");
        checklist.bulk_add_items("A", "1,2,3");
        checklist.bulk_add_items("B", "1,2,3");
        checklist.add_item("X", "1");

        let text = encode(&checklist.categories, 1);
        let headers: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("## "))
            .collect();
        assert_eq!(headers, vec!["## A", "## B", "## X"]);
    }

    #[test]
    fn test_decode_basic() {
        let text = "## Todo\n- [ ] Buy groceries\n- [x] Laundry\n";
        let categories = decode(text);

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Todo");
        assert_eq!(categories[0].items.len(), 2);
        assert_eq!(categories[0].items[0].name, "Buy groceries");
        assert!(!categories[0].items[0].done);
        assert!(categories[0].items[1].done);
    }

    #[test]
    fn test_decode_label_is_both_name_and_formula() {
        let categories = decode("## A\n- [ ] walk {number} laps\n");
        let item = &categories[0].items[0];
        assert_eq!(item.name, "walk {number} laps");
        assert_eq!(item.formula, "walk {number} laps");
    }

    #[test]
    fn test_decode_drops_items_before_any_header() {
        let text = "- [ ] orphan\n- [x] another\n";
        assert!(decode(text).is_empty());
    }

    #[test]
    fn test_decode_ignores_unrecognized_lines() {
        let text = "# title\n## A\nsome prose\n- [ ] kept\n* [ ] not a marker\n";
        let categories = decode(text);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].items.len(), 1);
        assert_eq!(categories[0].items[0].name, "kept");
    }

    #[test]
    fn test_decode_uppercase_marker_is_not_an_item() {
        let categories = decode("## A\n- [X] shouting\n");
        assert!(categories[0].items.is_empty());
    }

    #[test]
    fn test_decode_label_starts_at_fixed_offset() {
        // The byte right after the marker is skipped, whatever it is.
        let categories = decode("## A\n- [ ]x\n- [ ]  padded \n");
        assert_eq!(categories[0].items[0].name, "");
        assert_eq!(categories[0].items[1].name, "padded");
    }

    #[test]
    fn test_round_trip_without_templates() {
        let mut checklist = Checklist::new();
        checklist.bulk_add_categories("A,B");
        checklist.bulk_add_items("A", "one,two,three");
        checklist.add_item("B", "solo");
        checklist.toggle_item_done("A", "two");

        let decoded = decode(&encode(&checklist.categories, 1));

        // Encode sorts by the export policy: A (3 items) before B (1 item).
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0], checklist.categories[0]);
        assert_eq!(decoded[1], checklist.categories[1]);

        // A second round trip is stable.
        assert_eq!(decode(&encode(&decoded, 1)), decoded);
    }
}
