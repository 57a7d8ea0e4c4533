//! Common regex patterns for purchase-order email extraction.
//!
//! All matching is case-insensitive. Currency tokens are `$` followed by
//! digits with optional grouping commas and a decimal point, captured
//! verbatim.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Vendor line: "VENDOR: TechComponents Inc."
    pub static ref VENDOR: Regex = Regex::new(
        r"(?i)VENDOR:\s*(.*)"
    ).unwrap();

    // Tracking number: word characters and hyphens, e.g. "FX-78901234567"
    pub static ref TRACKING_NUMBER: Regex = Regex::new(
        r"(?i)Tracking Number:\s*([\w-]+)"
    ).unwrap();

    // Shipping cost line
    pub static ref SHIPPING: Regex = Regex::new(
        r"(?i)Shipping:\s*(\$[\d.,]+)"
    ).unwrap();

    // Tax line. Arbitrary text is tolerated between "Tax" and the colon so
    // that rate suffixes like "Tax (8.5%):" still match.
    pub static ref TAX: Regex = Regex::new(
        r"(?i)Tax.*?:\s*(\$[\d.,]+)"
    ).unwrap();

    // Grand total, unanchored. Matches the first "Total:" occurrence in the
    // document, which may be a line item's own total line (and also matches
    // inside "Subtotal:"). The parser treats the first match in document
    // order as the grand total unless scoped-total mode is on.
    pub static ref TOTAL: Regex = Regex::new(
        r"(?i)Total:\s*(\$[\d.,]+)"
    ).unwrap();

    // Line-anchored total, used for the scoped grand-total search where a
    // bare "Total:" must not match inside "Subtotal:".
    pub static ref TOTAL_LINE: Regex = Regex::new(
        r"(?im)^\s*Total:\s*(\$[\d.,]+)"
    ).unwrap();

    // Items section: everything after "ITEMS:" up to the next summary or
    // shipping-information header, or end of text.
    pub static ref ITEMS_SECTION: Regex = Regex::new(
        r"(?is)ITEMS:(.*?)(?:SUMMARY:|SHIPPING INFORMATION:|\z)"
    ).unwrap();

    // Numbered-list marker separating item blocks: "1. ", "12. "
    pub static ref ITEM_MARKER: Regex = Regex::new(
        r"\d+\.\s+"
    ).unwrap();

    // Per-item fields
    pub static ref QUANTITY: Regex = Regex::new(
        r"(?i)Quantity:\s*(\d+)"
    ).unwrap();

    pub static ref UNIT_COST: Regex = Regex::new(
        r"(?i)Unit Cost:\s*(\$[\d.,]+)"
    ).unwrap();

    // Bare currency token
    pub static ref CURRENCY_TOKEN: Regex = Regex::new(
        r"\$[\d.,]+"
    ).unwrap();

    // Summary section marker, for scoped grand-total extraction
    pub static ref SUMMARY_MARKER: Regex = Regex::new(
        r"(?i)SUMMARY:"
    ).unwrap();

    // Header fields
    pub static ref ORDER_NUMBER: Regex = Regex::new(
        r"(?i)Order\s*(?:Number|#)[:\s]*([A-Za-z0-9-]+)"
    ).unwrap();

    pub static ref ORDER_DATE: Regex = Regex::new(
        r"(?im)^(?:Order\s+)?Date:\s*(.+)$"
    ).unwrap();

    pub static ref SHIPPING_ADDRESS: Regex = Regex::new(
        r"(?i)(?:Shipping|Delivery)\s+Address:\s*(.*)"
    ).unwrap();

    pub static ref CARRIER: Regex = Regex::new(
        r"(?i)Carrier:\s*(.*)"
    ).unwrap();

    pub static ref ESTIMATED_DELIVERY: Regex = Regex::new(
        r"(?i)Estimated\s+Delivery:\s*(.*)"
    ).unwrap();

    pub static ref SUBTOTAL: Regex = Regex::new(
        r"(?i)Subtotal:\s*(\$[\d.,]+)"
    ).unwrap();
}
