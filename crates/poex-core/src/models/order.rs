//! Purchase-order data model.
//!
//! Every field defaults to an empty string (or empty vector) rather than an
//! option: a record is always fully populated, with absence represented as
//! emptiness. Currency values are retained verbatim as they appear in the
//! source text (`$` sign, grouping commas, decimal digits) and are not
//! parsed into numbers during extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A purchase order extracted from email text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseOrder {
    /// Vendor name from the `VENDOR:` line.
    pub vendor_name: String,

    /// Ordered line items, in order of appearance in the source text.
    pub items: Vec<LineItem>,

    /// Shipping cost as a verbatim currency token.
    pub shipping: String,

    /// Carrier tracking number.
    pub tracking_number: String,

    /// Tax amount as a verbatim currency token.
    pub taxes: String,

    /// Grand total as a verbatim currency token.
    pub total: String,
}

impl PurchaseOrder {
    /// Check whether nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.vendor_name.is_empty()
            && self.items.is_empty()
            && self.shipping.is_empty()
            && self.tracking_number.is_empty()
            && self.taxes.is_empty()
            && self.total.is_empty()
    }
}

/// A single line item on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Product name (first line of the item block).
    pub name: String,

    /// Quantity as the digits that appeared in the text.
    pub quantity: String,

    /// Per-unit cost as a verbatim currency token.
    pub unit_cost: String,

    /// Line total as a verbatim currency token.
    pub total: String,
}

/// Supplemental header fields found on purchase-order emails.
///
/// These sit outside the core record: order number, order date and address
/// details are useful for review and batch summaries but are not part of the
/// cost breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderMeta {
    /// Order/PO number, e.g. `PO-12345`.
    pub order_number: String,

    /// Order date as it appeared in the text.
    pub order_date: String,

    /// Shipping address line.
    pub shipping_address: String,

    /// Carrier name from the shipping information section.
    pub carrier: String,

    /// Estimated delivery date as it appeared in the text.
    pub estimated_delivery: String,

    /// Subtotal as a verbatim currency token.
    pub subtotal: String,
}

impl OrderMeta {
    /// Try to parse the raw order date into a calendar date.
    ///
    /// The raw text stays authoritative; this is a convenience for callers
    /// that want to sort or filter batches by date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.order_date.trim();
        if raw.is_empty() {
            return None;
        }

        const FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }

    /// Check whether no header fields were found.
    pub fn is_empty(&self) -> bool {
        self.order_number.is_empty()
            && self.order_date.is_empty()
            && self.shipping_address.is_empty()
            && self.carrier.is_empty()
            && self.estimated_delivery.is_empty()
            && self.subtotal.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let order = PurchaseOrder::default();
        assert!(order.is_empty());
        assert!(order.items.is_empty());
        assert_eq!(order.vendor_name, "");
    }

    #[test]
    fn test_parsed_date_formats() {
        let mut meta = OrderMeta::default();

        meta.order_date = "May 14, 2023".to_string();
        assert_eq!(meta.parsed_date(), NaiveDate::from_ymd_opt(2023, 5, 14));

        meta.order_date = "2023-05-14".to_string();
        assert_eq!(meta.parsed_date(), NaiveDate::from_ymd_opt(2023, 5, 14));

        meta.order_date = "next Tuesday".to_string();
        assert_eq!(meta.parsed_date(), None);

        meta.order_date = String::new();
        assert_eq!(meta.parsed_date(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let order = PurchaseOrder {
            vendor_name: "TechComponents Inc.".to_string(),
            items: vec![LineItem {
                name: "Premium SSD Drive 500GB".to_string(),
                quantity: "5".to_string(),
                unit_cost: "$89.99".to_string(),
                total: "$449.95".to_string(),
            }],
            shipping: "$24.99".to_string(),
            tracking_number: "FX-78901234567".to_string(),
            taxes: "$76.92".to_string(),
            total: "$449.95".to_string(),
        };

        let json = serde_json::to_string(&order).unwrap();
        let back: PurchaseOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
