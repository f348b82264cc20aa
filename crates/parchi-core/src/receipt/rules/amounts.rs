//! Amount extraction with confidence scoring.
//!
//! Every pattern match becomes an [`AmountCandidate`]; generic
//! currency patterns start at a base confidence and earn boosts from
//! surrounding context, while category-specific harvesting adds
//! candidates at fixed confidences. Selection takes the best
//! confidence, breaking near-ties (within [`CONFIDENCE_TIE_WINDOW`])
//! by the largest value, since a near-tie is usually a sub-total
//! against the grand total.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::document::{ReceiptCategory, TextDocument};

use super::patterns::{
    BARE_CURRENCY_NUMBER, DIGITAL_AMOUNT, FIRST_NUMBER, GENERIC_AMOUNT_PATTERNS,
    LOOSE_AMOUNT_LABEL, LOOSE_AMOUNT_SUFFIX,
};

/// Base confidence for a generic currency-pattern match.
pub const BASE_CONFIDENCE: f32 = 0.5;

/// Boost when the context window mentions a total/sum keyword.
pub const TOTAL_KEYWORD_BOOST: f32 = 0.3;

/// Boost when the match lies in the final 30% of the text.
pub const TAIL_POSITION_BOOST: f32 = 0.1;

/// Boost when the parsed value exceeds [`LARGE_VALUE_THRESHOLD`].
pub const LARGE_VALUE_BOOST: f32 = 0.1;

/// Values above this are more likely the grand total than a line item.
pub const LARGE_VALUE_THRESHOLD: i64 = 100;

/// Confidence for a number on an explicit grand-total line.
pub const LABELED_TOTAL_CONFIDENCE: f32 = 0.9;

/// Confidence for a total-ish line among the last lines of a receipt.
pub const TRAILING_TOTAL_CONFIDENCE: f32 = 0.8;

/// Confidence for a labeled amount on a digital confirmation.
pub const DIGITAL_AMOUNT_CONFIDENCE: f32 = 0.8;

/// Confidence for loose matches on unclassified documents.
pub const LOOSE_CONFIDENCE: f32 = 0.5;

/// Confidence for the last-resort currency-symbol scan.
pub const LAST_RESORT_CONFIDENCE: f32 = 0.3;

/// Candidates within this much of the best confidence tie-break by value.
pub const CONFIDENCE_TIE_WINDOW: f32 = 0.1;

/// Characters of context inspected on each side of a match.
const CONTEXT_RADIUS: usize = 20;

/// How many trailing lines are scanned for total-ish lines.
const TRAILING_LINES: usize = 5;

/// Labels that mark an explicit grand-total line.
const PRIMARY_TOTAL_LABELS: &[&str] = &[
    "grand total",
    "total amount",
    "net amount",
    "total payable",
    "amount payable",
];

/// Weaker hints accepted on the trailing lines of a receipt.
const TRAILING_TOTAL_HINTS: &[&str] = &["total", "amount", "pay", "paid"];

/// Keywords that boost a match when found in its context window.
const CONTEXT_TOTAL_KEYWORDS: &[&str] = &["total", "sum", "amount", "payable", "grand"];

/// A provisionally matched monetary value awaiting selection.
#[derive(Debug, Clone)]
pub struct AmountCandidate {
    /// Parsed amount.
    pub value: Decimal,
    /// Heuristic ranking score (0.0 - 1.0).
    pub confidence: f32,
    /// Source text that was matched.
    pub source: String,
}

impl AmountCandidate {
    pub fn new(value: Decimal, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence: confidence.min(1.0),
            source: source.into(),
        }
    }

    /// Strict-weak ordering by confidence, then value.
    pub fn rank(&self, other: &Self) -> Ordering {
        self.confidence
            .partial_cmp(&other.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.value.cmp(&other.value))
    }
}

/// Pick the winning candidate: best confidence, with near-ties
/// (within [`CONFIDENCE_TIE_WINDOW`]) resolved to the largest value.
pub fn select_best(candidates: &[AmountCandidate]) -> Option<&AmountCandidate> {
    let top = candidates.iter().max_by(|a, b| a.rank(b))?;
    // Inclusive boundary: a candidate exactly at the window edge
    // still ties, despite float rounding.
    let cutoff = top.confidence - CONFIDENCE_TIE_WINDOW - f32::EPSILON;

    candidates
        .iter()
        .filter(|c| c.confidence >= cutoff)
        .max_by(|a, b| a.value.cmp(&b.value))
}

/// Extract the most plausible amount for the category.
///
/// Returns the value and the confidence it was selected at, or `None`
/// when not even the permissive last-resort scan finds a number.
pub fn extract_amount(doc: &TextDocument, category: ReceiptCategory) -> Option<(Decimal, f32)> {
    let text = &doc.full_text;
    let mut candidates = harvest_generic(text);

    match category {
        ReceiptCategory::PhysicalReceipt => harvest_physical(doc, &mut candidates),
        ReceiptCategory::DigitalPayment | ReceiptCategory::UpiPayment => {
            harvest_digital(doc, &mut candidates)
        }
        ReceiptCategory::Unknown => harvest_unknown(text, &mut candidates),
    }

    if let Some(best) = select_best(&candidates) {
        return Some((best.value, best.confidence));
    }

    // Last resort: any number right after a currency symbol.
    BARE_CURRENCY_NUMBER
        .captures(text)
        .and_then(|caps| parse_amount(&caps[1]))
        .map(|value| (value, LAST_RESORT_CONFIDENCE))
}

/// Run the generic currency patterns over the whole text.
fn harvest_generic(text: &str) -> Vec<AmountCandidate> {
    let mut candidates = Vec::new();

    for pattern in GENERIC_AMOUNT_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(value) = parse_amount(&caps[1]) else {
                continue;
            };
            let full_match = caps.get(0).map(|m| (m.start(), m.end(), m.as_str()));
            let Some((start, end, source)) = full_match else {
                continue;
            };

            let mut confidence = BASE_CONFIDENCE;

            let window = context_window(text, start, end).to_lowercase();
            if CONTEXT_TOTAL_KEYWORDS.iter().any(|k| window.contains(k)) {
                confidence += TOTAL_KEYWORD_BOOST;
            }
            if start * 10 >= text.len() * 7 {
                confidence += TAIL_POSITION_BOOST;
            }
            if value > Decimal::from(LARGE_VALUE_THRESHOLD) {
                confidence += LARGE_VALUE_BOOST;
            }

            candidates.push(AmountCandidate::new(value, confidence, source));
        }
    }

    candidates
}

/// Labeled and trailing total lines on printed receipts.
fn harvest_physical(doc: &TextDocument, candidates: &mut Vec<AmountCandidate>) {
    for line in &doc.lines {
        let lower = line.to_lowercase();
        if PRIMARY_TOTAL_LABELS.iter().any(|l| lower.contains(l)) {
            if let Some(value) = first_number(line) {
                candidates.push(AmountCandidate::new(
                    value,
                    LABELED_TOTAL_CONFIDENCE,
                    line.as_str(),
                ));
            }
        }
    }

    let tail_start = doc.lines.len().saturating_sub(TRAILING_LINES);
    for line in &doc.lines[tail_start..] {
        let lower = line.to_lowercase();
        if TRAILING_TOTAL_HINTS.iter().any(|h| lower.contains(h)) {
            if let Some(value) = first_number(line) {
                candidates.push(AmountCandidate::new(
                    value,
                    TRAILING_TOTAL_CONFIDENCE,
                    line.as_str(),
                ));
            }
        }
    }
}

/// "Amount:"/"Paid:" lines on digital confirmations.
fn harvest_digital(doc: &TextDocument, candidates: &mut Vec<AmountCandidate>) {
    for line in &doc.lines {
        if let Some(caps) = DIGITAL_AMOUNT.captures(line) {
            if let Some(value) = parse_amount(&caps[1]) {
                candidates.push(AmountCandidate::new(
                    value,
                    DIGITAL_AMOUNT_CONFIDENCE,
                    line.as_str(),
                ));
            }
        }
    }
}

/// Looser label and suffix patterns for unclassified documents.
fn harvest_unknown(text: &str, candidates: &mut Vec<AmountCandidate>) {
    for caps in LOOSE_AMOUNT_LABEL.captures_iter(text) {
        if let Some(value) = parse_amount(&caps[1]) {
            candidates.push(AmountCandidate::new(value, LOOSE_CONFIDENCE, &caps[0]));
        }
    }
    for caps in LOOSE_AMOUNT_SUFFIX.captures_iter(text) {
        if let Some(value) = parse_amount(&caps[1]) {
            candidates.push(AmountCandidate::new(value, LOOSE_CONFIDENCE, &caps[0]));
        }
    }
}

/// First number on a line, with separators stripped.
fn first_number(line: &str) -> Option<Decimal> {
    FIRST_NUMBER
        .captures(line)
        .and_then(|caps| parse_amount(&caps[1]))
}

/// Parse a matched number, stripping thousands separators.
///
/// Failures and negative values drop the candidate; they never abort
/// the pipeline.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.replace([',', ' '], "");
    let value = Decimal::from_str(cleaned.trim()).ok()?;
    if value < Decimal::ZERO {
        return None;
    }
    Some(value)
}

/// Slice a window around a match, clamped to char boundaries.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let mut from = start.saturating_sub(CONTEXT_RADIUS);
    while !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = end.saturating_add(CONTEXT_RADIUS).min(text.len());
    while !text.is_char_boundary(to) {
        to += 1;
    }
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(text: &str) -> TextDocument {
        TextDocument::from_text(text)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("450"), Some(dec("450")));
        assert_eq!(parse_amount("12,34,567"), Some(dec("1234567")));
        assert_eq!(parse_amount("-45"), None);
        assert_eq!(parse_amount("4.5.6"), None);
    }

    #[test]
    fn test_near_tie_selects_larger_value() {
        let candidates = vec![
            AmountCandidate::new(dec("500"), 0.85, "subtotal 500"),
            AmountCandidate::new(dec("1200"), 0.80, "total 1200"),
        ];
        let best = select_best(&candidates).unwrap();
        assert_eq!(best.value, dec("1200"));
    }

    #[test]
    fn test_clear_confidence_gap_ignores_value() {
        let candidates = vec![
            AmountCandidate::new(dec("450"), 0.9, "grand total 450"),
            AmountCandidate::new(dec("9000"), 0.5, "9,000"),
        ];
        let best = select_best(&candidates).unwrap();
        assert_eq!(best.value, dec("450"));
    }

    #[test]
    fn test_select_best_empty() {
        assert!(select_best(&[]).is_none());
    }

    #[test]
    fn test_physical_grand_total() {
        let d = doc("SuperMart\nBill No: INV-2024-117\n2 x 150\nGrand Total Rs. 450");
        let (value, confidence) = extract_amount(&d, ReceiptCategory::PhysicalReceipt).unwrap();
        assert_eq!(value, dec("450"));
        assert!(confidence >= LABELED_TOTAL_CONFIDENCE);
    }

    #[test]
    fn test_digital_labeled_amount() {
        let d = doc("Paid to Raj Traders\nUPI Ref No 400881234567\nAmount: Rs 1200");
        let (value, _) = extract_amount(&d, ReceiptCategory::UpiPayment).unwrap();
        assert_eq!(value, dec("1200"));
    }

    #[test]
    fn test_comma_grouped_amount() {
        let d = doc("Net amount payable\nTotal: 1,23,456.78");
        let (value, _) = extract_amount(&d, ReceiptCategory::Unknown).unwrap();
        assert_eq!(value, dec("123456.78"));
    }

    #[test]
    fn test_no_numbers_returns_none() {
        let d = doc("random unrelated text with no numbers");
        assert_eq!(extract_amount(&d, ReceiptCategory::Unknown), None);
    }

    #[test]
    fn test_last_resort_currency_scan() {
        // ":" between symbol and number defeats the generic patterns
        // but not the permissive last-resort scan.
        let d = doc("charged Rs: 99");
        let (value, confidence) = extract_amount(&d, ReceiptCategory::Unknown).unwrap();
        assert_eq!(value, dec("99"));
        assert_eq!(confidence, LAST_RESORT_CONFIDENCE);
    }
}
