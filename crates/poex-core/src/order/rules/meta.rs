//! Supplemental header field extraction.
//!
//! Order number, date, shipping address and carrier details ride along on
//! most purchase-order emails. They are not part of the cost breakdown, so
//! they land in [`OrderMeta`] rather than the core record.

use crate::models::order::OrderMeta;

use super::patterns::{
    CARRIER, ESTIMATED_DELIVERY, ORDER_DATE, ORDER_NUMBER, SHIPPING_ADDRESS, SUBTOTAL,
};
use super::FieldExtractor;

/// Header field extractor.
pub struct MetaExtractor;

impl MetaExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MetaExtractor {
    type Output = OrderMeta;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let meta = extract_meta(text);
        if meta.is_empty() {
            None
        } else {
            Some(meta)
        }
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}

/// Extract supplemental header fields from email text.
pub fn extract_meta(text: &str) -> OrderMeta {
    let capture = |re: &regex::Regex| {
        re.captures(text)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default()
    };

    OrderMeta {
        order_number: capture(&ORDER_NUMBER),
        order_date: capture(&ORDER_DATE),
        shipping_address: capture(&SHIPPING_ADDRESS),
        carrier: capture(&CARRIER),
        estimated_delivery: capture(&ESTIMATED_DELIVERY),
        subtotal: capture(&SUBTOTAL),
    }
}
