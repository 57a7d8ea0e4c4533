//! Currency token extraction and price formatting.
//!
//! Currency tokens are kept as text throughout extraction; only
//! [`format_price`] parses them, and only for re-display.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::patterns::CURRENCY_TOKEN;
use super::{ExtractionMatch, FieldExtractor};

/// Currency token extractor.
pub struct MoneyExtractor;

impl MoneyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MoneyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MoneyExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        CURRENCY_TOKEN
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first currency token from text.
pub fn extract_money(text: &str) -> Option<String> {
    MoneyExtractor::new().extract(text).map(|m| m.value)
}

/// Normalize a price string for re-display.
///
/// Strips every character except digits and the decimal point, then renders
/// the value as `$` plus exactly two decimal places: `"$1,006.86"` becomes
/// `"$1006.86"`. Returns an empty string when nothing numeric remains, so a
/// missing value never formats as a bogus price.
pub fn format_price(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if stripped.is_empty() {
        return String::new();
    }

    match leading_number(&stripped) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("${:.2}", rounded)
        }
        None => String::new(),
    }
}

/// Parse the longest leading numeric prefix of a digits-and-dots string.
///
/// Mirrors prefix-style float parsing: "1.2.3" reads as 1.2, "1." as 1,
/// ".5" as 0.5. A bare "." has no numeric prefix.
fn leading_number(s: &str) -> Option<Decimal> {
    let mut end = 0;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }

    let prefix = s[..end].trim_end_matches('.');
    if prefix.is_empty() {
        return None;
    }

    if let Some(rest) = prefix.strip_prefix('.') {
        return Decimal::from_str(&format!("0.{}", rest)).ok();
    }

    Decimal::from_str(prefix).ok()
}
