//! Line-item extraction from the ITEMS section.
//!
//! The section runs from `ITEMS:` to the next `SUMMARY:` or
//! `SHIPPING INFORMATION:` header (or end of text) and is split into blocks
//! on numbered-list markers ("1. ", "12. "). The first line of a block is
//! the item name; quantity, unit cost and line total are matched
//! independently within the block and default to empty when absent.

use tracing::debug;

use crate::models::order::LineItem;

use super::patterns::{ITEMS_SECTION, ITEM_MARKER, QUANTITY, TOTAL, UNIT_COST};
use super::FieldExtractor;

/// Line-item extractor.
pub struct ItemExtractor;

impl ItemExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ItemExtractor {
    type Output = LineItem;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let Some(caps) = ITEMS_SECTION.captures(text) else {
            debug!("no ITEMS section found");
            return Vec::new();
        };

        let section = caps[1].trim().to_string();

        ITEM_MARKER
            .split(&section)
            .filter(|block| !block.is_empty())
            .map(parse_block)
            .collect()
    }
}

/// Extract all line items from email text.
pub fn extract_items(text: &str) -> Vec<LineItem> {
    ItemExtractor::new().extract_all(text)
}

fn parse_block(block: &str) -> LineItem {
    let name = block
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .unwrap_or_default();

    let quantity = QUANTITY
        .captures(block)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let unit_cost = UNIT_COST
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    let total = TOTAL
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    LineItem {
        name,
        quantity,
        unit_cost,
        total,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_extract_two_items() {
        let text = "\
ITEMS:
1. Premium SSD Drive 500GB
   Quantity: 5
   Unit Cost: $89.99
   Total: $449.95

2. Wireless Keyboard MK-7
   Quantity: 10
   Unit Cost: $45.50
   Total: $455.00

SUMMARY:
Total: $1,006.86
";

        let items = extract_items(text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Premium SSD Drive 500GB");
        assert_eq!(items[0].quantity, "5");
        assert_eq!(items[0].unit_cost, "$89.99");
        assert_eq!(items[0].total, "$449.95");
        assert_eq!(items[1].name, "Wireless Keyboard MK-7");
        assert_eq!(items[1].total, "$455.00");
    }

    #[test]
    fn test_section_without_numbered_entries() {
        let text = "ITEMS:\n\nSUMMARY:\nTotal: $10.00\n";
        assert!(extract_items(text).is_empty());
    }

    #[test]
    fn test_no_items_section() {
        assert!(extract_items("just a plain email").is_empty());
    }

    #[test]
    fn test_section_runs_to_end_of_text() {
        let text = "ITEMS:\n1. Widget\n   Quantity: 3\n";
        let items = extract_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Widget");
        assert_eq!(items[0].quantity, "3");
        assert_eq!(items[0].unit_cost, "");
        assert_eq!(items[0].total, "");
    }

    #[test]
    fn test_malformed_block_yields_empty_fields() {
        // A block with no recognizable fields still produces an item with
        // the first line as its name.
        let text = "ITEMS:\n1. Mystery part, no details\n";
        let items = extract_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Mystery part, no details");
        assert_eq!(items[0].quantity, "");
    }
}
