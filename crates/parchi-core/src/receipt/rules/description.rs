//! Description/merchant extraction.
//!
//! Digital payments name a payee ("paid to", VPA handles); printed
//! receipts usually open with the store name or carry an item list;
//! anything else falls back to the largest text block and finally the
//! first non-blank line.

use crate::models::document::{ReceiptCategory, TextDocument};

use super::cleanup;
use super::patterns::{
    ITEM_SECTION_END, ITEM_SECTION_START, PAID_TO, RECIPIENT_LABEL, VPA_HANDLE,
};

/// Longest payee capture accepted from a labeled line.
const MAX_PAYEE_CHARS: usize = 50;

/// Header lines inspected for a store name.
const HEADER_LINES: usize = 3;

/// Item lines joined into a description when no store name is found.
const MAX_ITEM_LINES: usize = 2;

/// Truncation length for the largest-block fallback.
const MAX_BLOCK_CHARS: usize = 100;

/// Words that disqualify a header line from being the store name.
const HEADER_SKIP_WORDS: &[&str] = &["bill", "invoice", "receipt", "#", "date", "time"];

/// Extract a merchant name, payee, or representative text block.
pub fn extract_description(doc: &TextDocument, category: ReceiptCategory) -> Option<String> {
    let raw = match category {
        ReceiptCategory::DigitalPayment | ReceiptCategory::UpiPayment => digital_description(doc),
        ReceiptCategory::PhysicalReceipt => physical_description(doc),
        ReceiptCategory::Unknown => largest_block(doc),
    };

    let cleaned = raw
        .or_else(|| first_non_blank_line(doc))
        .map(|s| cleanup(&s))?;

    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Payee name from "paid to"/"recipient:" lines, then VPA handles.
fn digital_description(doc: &TextDocument) -> Option<String> {
    for line in &doc.lines {
        let captured = PAID_TO
            .captures(line)
            .or_else(|| RECIPIENT_LABEL.captures(line))
            .map(|caps| caps[1].trim().to_string());

        if let Some(name) = captured {
            if !name.is_empty() && name.chars().count() < MAX_PAYEE_CHARS {
                return Some(name);
            }
        }
    }

    // No labeled payee; look for a UPI handle line.
    let handle_line = doc.lines.iter().find(|line| {
        let lower = line.to_lowercase();
        lower.contains('@') || lower.contains("upi id") || lower.contains("vpa")
    })?;

    match VPA_HANDLE.captures(handle_line) {
        Some(caps) => Some(caps[1].replace(['.', '_', '-'], " ")),
        None => Some(handle_line.clone()),
    }
}

/// Store name from the header, else the first item-list lines.
fn physical_description(doc: &TextDocument) -> Option<String> {
    let store_name = doc
        .lines
        .iter()
        .take(HEADER_LINES)
        .map(|line| line.trim())
        .find(|line| {
            let lower = line.to_lowercase();
            line.chars().count() > 3 && !HEADER_SKIP_WORDS.iter().any(|w| lower.contains(w))
        });

    if let Some(name) = store_name {
        return Some(name.to_string());
    }

    let items = item_section_lines(doc);
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

/// Collect lines between an item-list header and a totals line.
fn item_section_lines(doc: &TextDocument) -> Vec<String> {
    let mut items = Vec::new();
    let mut in_section = false;

    for line in &doc.lines {
        let trimmed = line.trim();
        if !in_section {
            if ITEM_SECTION_START.is_match(trimmed) {
                in_section = true;
            }
            continue;
        }
        if ITEM_SECTION_END.is_match(trimmed) {
            break;
        }
        if !trimmed.is_empty() {
            items.push(trimmed.to_string());
            if items.len() == MAX_ITEM_LINES {
                break;
            }
        }
    }

    items
}

/// Largest block verbatim, truncated with an ellipsis if oversized.
fn largest_block(doc: &TextDocument) -> Option<String> {
    let block = doc.blocks.iter().max_by_key(|b| b.chars().count())?;

    if block.chars().count() > MAX_BLOCK_CHARS {
        let truncated: String = block.chars().take(MAX_BLOCK_CHARS).collect();
        Some(format!("{}...", truncated))
    } else {
        Some(block.clone())
    }
}

fn first_non_blank_line(doc: &TextDocument) -> Option<String> {
    doc.lines
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .map(|line| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> TextDocument {
        TextDocument::from_text(text)
    }

    #[test]
    fn test_paid_to_payee() {
        let d = doc("Paid to Raj Traders\nUPI Ref No 400881234567\nAmount: Rs 1200");
        let desc = extract_description(&d, ReceiptCategory::UpiPayment);
        assert_eq!(desc.as_deref(), Some("Raj Traders"));
    }

    #[test]
    fn test_recipient_label() {
        let d = doc("Payment successful\nMerchant: Fresh Bazaar\nAmount: 300");
        let desc = extract_description(&d, ReceiptCategory::DigitalPayment);
        assert_eq!(desc.as_deref(), Some("Fresh Bazaar"));
    }

    #[test]
    fn test_vpa_handle_name() {
        let d = doc("Payment successful\nraj.traders@oksbi\nDone");
        let desc = extract_description(&d, ReceiptCategory::UpiPayment);
        assert_eq!(desc.as_deref(), Some("raj traders"));
    }

    #[test]
    fn test_store_name_from_header() {
        let d = doc("SuperMart\nBill No: INV-2024-117\n2 x 150\nGrand Total Rs. 450");
        let desc = extract_description(&d, ReceiptCategory::PhysicalReceipt);
        assert_eq!(desc.as_deref(), Some("SuperMart"));
    }

    #[test]
    fn test_item_section_when_header_unusable() {
        let d = doc("Bill No 42\nDate: 01/02\nReceipt\nItem Qty Price\nRice 1 80\nDal 2 120\nTotal 320");
        let desc = extract_description(&d, ReceiptCategory::PhysicalReceipt);
        assert_eq!(desc.as_deref(), Some("Rice 1 80, Dal 2 120"));
    }

    #[test]
    fn test_unknown_returns_largest_block() {
        let d = doc("tiny\n\nthis block is clearly the largest of the two");
        let desc = extract_description(&d, ReceiptCategory::Unknown);
        assert_eq!(
            desc.as_deref(),
            Some("this block is clearly the largest of the two")
        );
    }

    #[test]
    fn test_unknown_block_truncated_with_ellipsis() {
        let long = "x".repeat(140);
        let d = doc(&long);
        let desc = extract_description(&d, ReceiptCategory::Unknown).unwrap();
        assert_eq!(desc.chars().count(), 103);
        assert!(desc.ends_with("..."));
    }

    #[test]
    fn test_fallback_first_non_blank_line() {
        let d = doc("\n\nPaid somewhere odd");
        let desc = extract_description(&d, ReceiptCategory::DigitalPayment);
        assert_eq!(desc.as_deref(), Some("Paid somewhere odd"));
    }

    #[test]
    fn test_empty_document_yields_none() {
        let d = doc("");
        assert_eq!(extract_description(&d, ReceiptCategory::Unknown), None);
    }
}
