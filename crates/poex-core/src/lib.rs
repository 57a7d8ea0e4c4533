//! Core library for purchase-order email extraction.
//!
//! This crate provides:
//! - A rule-based extractor turning raw email text into a structured
//!   purchase-order record (vendor, line items, shipping, tax, total)
//! - Supplemental header extraction (order number, date, shipping address)
//! - A price formatting helper for re-displaying currency tokens
//! - Configuration for extraction and output behavior

pub mod error;
pub mod models;
pub mod order;

pub use error::{PoexError, Result};
pub use models::config::{ExtractionConfig, OutputConfig, PoexConfig};
pub use models::order::{LineItem, OrderMeta, PurchaseOrder};
pub use order::{ExtractionResult, OrderParser, RuleOrderParser};
pub use order::rules::money::format_price;

/// Extract a purchase-order record from raw email text.
///
/// Convenience wrapper over a default [`RuleOrderParser`]. Never fails:
/// fields that cannot be found are left empty.
pub fn extract(text: &str) -> PurchaseOrder {
    RuleOrderParser::new().parse(text).order
}
