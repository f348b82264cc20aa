//! Reference/serial number extraction.
//!
//! Each category runs its own pattern cascade in declared order; the
//! first match wins. Fallback line scans only run when the whole
//! cascade misses.

use regex::Regex;

use crate::models::document::{ReceiptCategory, TextDocument};

use super::patterns::{
    DIGITAL_REFERENCE_CASCADE, GENERIC_REFERENCE_CASCADE, PHYSICAL_LINE_FALLBACK,
    PHYSICAL_REFERENCE_CASCADE, STANDALONE_TOKEN,
};

/// Lines considered by the digital fallback scan.
const DIGITAL_FALLBACK_LINES: usize = 5;

/// Lines considered by the physical fallback scan.
const PHYSICAL_FALLBACK_LINES: usize = 4;

/// Extract a transaction/bill/serial identifier for the category.
pub fn extract_reference(doc: &TextDocument, category: ReceiptCategory) -> Option<String> {
    match category {
        ReceiptCategory::DigitalPayment | ReceiptCategory::UpiPayment => {
            run_cascade(&DIGITAL_REFERENCE_CASCADE, &doc.full_text)
                .or_else(|| digital_fallback(doc))
        }
        ReceiptCategory::PhysicalReceipt => {
            run_cascade(&PHYSICAL_REFERENCE_CASCADE, &doc.full_text)
                .or_else(|| physical_fallback(doc))
        }
        ReceiptCategory::Unknown => run_cascade(&GENERIC_REFERENCE_CASCADE, &doc.full_text),
    }
}

/// Try patterns in declared order; first successful capture wins.
fn run_cascade(cascade: &[Regex], text: &str) -> Option<String> {
    for pattern in cascade {
        if let Some(caps) = pattern.captures(text) {
            return Some(caps[1].trim().to_string());
        }
    }
    None
}

/// Scan the first lines for a standalone alphanumeric token of length
/// 6-20 that is not purely numeric, skipping lines that mention
/// totals or currency.
fn digital_fallback(doc: &TextDocument) -> Option<String> {
    doc.lines
        .iter()
        .take(DIGITAL_FALLBACK_LINES)
        .map(|line| line.trim())
        .filter(|line| !mentions_total_or_currency(line))
        .filter_map(|line| STANDALONE_TOKEN.captures(line))
        .map(|caps| caps[1].to_string())
        .find(|token| token.chars().any(|c| c.is_ascii_alphabetic()))
}

fn mentions_total_or_currency(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains('₹')
        || lower
            .split_whitespace()
            .any(|word| matches!(word, "total" | "amount" | "rs" | "rs." | "inr" | "rupees"))
}

/// Scan the first lines for a bare "#1234" / "No. 8812" style line.
fn physical_fallback(doc: &TextDocument) -> Option<String> {
    doc.lines
        .iter()
        .take(PHYSICAL_FALLBACK_LINES)
        .map(|line| line.trim())
        .find_map(|line| {
            PHYSICAL_LINE_FALLBACK
                .captures(line)
                .map(|caps| caps[1].to_string())
        })
}
