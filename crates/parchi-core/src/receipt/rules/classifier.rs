//! Receipt category classification.
//!
//! Scores the document against three weighted keyword vocabularies
//! (physical, digital, UPI). UPI is a strict subset of digital, so
//! every UPI hit also feeds the digital score and the decision rule
//! checks UPI first to keep it from being masked on ties.

use crate::models::document::{ReceiptCategory, TextDocument};

use super::patterns::{PAYMENT_ID_HINT, QUANTITY_LINE};

/// Minimum UPI score required to classify as a UPI payment.
pub const UPI_SCORE_THRESHOLD: i32 = 3;

/// Bonus for structural hints (quantity lines, payment-id lines).
pub const STRUCTURAL_BONUS: i32 = 2;

/// Added to the digital score for every UPI vocabulary hit.
pub const UPI_DIGITAL_SPILLOVER: i32 = 1;

/// Phrases typical of printed store receipts, with weights 1-3.
pub static PHYSICAL_VOCABULARY: &[(&str, i32)] = &[
    ("tax invoice", 3),
    ("cash memo", 3),
    ("cash receipt", 3),
    ("invoice", 2),
    ("receipt", 2),
    ("bill", 2),
    ("grand total", 2),
    ("sub total", 2),
    ("subtotal", 2),
    ("cashier", 2),
    ("mrp", 2),
    ("qty", 2),
    ("gstin", 2),
    ("gst", 1),
    ("total", 1),
    ("change", 1),
    ("items", 1),
    ("thank you", 1),
    ("visit again", 1),
];

/// Phrases typical of digital payment confirmations.
pub static DIGITAL_VOCABULARY: &[(&str, i32)] = &[
    ("payment successful", 3),
    ("transaction successful", 3),
    ("payment confirmation", 3),
    ("transaction id", 2),
    ("payment id", 2),
    ("paid to", 2),
    ("debited from", 2),
    ("credited to", 2),
    ("net banking", 2),
    ("wallet", 2),
    ("utr", 2),
    ("imps", 2),
    ("neft", 2),
    ("rtgs", 2),
    ("paid", 1),
    ("transaction", 1),
];

/// Phrases specific to UPI payments.
pub static UPI_VOCABULARY: &[(&str, i32)] = &[
    ("upi", 3),
    ("upi id", 3),
    ("upi ref", 3),
    ("vpa", 3),
    ("bhim", 3),
    ("google pay", 3),
    ("gpay", 3),
    ("phonepe", 3),
    ("paytm", 2),
    ("@ybl", 2),
    ("@oksbi", 2),
    ("@okaxis", 2),
    ("@okhdfcbank", 2),
    ("@paytm", 2),
    ("@upi", 2),
];

/// Sum the weights of vocabulary phrases present in `text`.
///
/// Presence check, not frequency: repeated occurrences of the same
/// phrase count once. `text` must already be lowercased.
fn vocabulary_score(text: &str, vocabulary: &[(&str, i32)]) -> i32 {
    vocabulary
        .iter()
        .filter(|(phrase, _)| text.contains(phrase))
        .map(|(_, weight)| weight)
        .sum()
}

/// Classify a document into one of the four receipt categories.
///
/// Pure and total; an empty document scores zero everywhere and comes
/// back as [`ReceiptCategory::Unknown`].
pub fn classify(doc: &TextDocument) -> ReceiptCategory {
    let text = doc.full_text.to_lowercase();

    let mut physical = vocabulary_score(&text, PHYSICAL_VOCABULARY);
    let mut digital = vocabulary_score(&text, DIGITAL_VOCABULARY);
    let upi = vocabulary_score(&text, UPI_VOCABULARY);

    // UPI payments are a subset of digital payments.
    let upi_hits = UPI_VOCABULARY
        .iter()
        .filter(|(phrase, _)| text.contains(phrase))
        .count() as i32;
    digital += upi_hits * UPI_DIGITAL_SPILLOVER;

    // Structural hints: "2 x 150" quantity lines mark printed
    // receipts, "payment id: <alnum>" marks digital confirmations.
    if doc.lines.iter().any(|line| QUANTITY_LINE.is_match(line)) {
        physical += STRUCTURAL_BONUS;
    }
    if PAYMENT_ID_HINT.is_match(&text) {
        digital += STRUCTURAL_BONUS;
    }

    if upi >= UPI_SCORE_THRESHOLD && upi >= digital {
        ReceiptCategory::UpiPayment
    } else if digital > physical {
        ReceiptCategory::DigitalPayment
    } else if physical > 0 {
        ReceiptCategory::PhysicalReceipt
    } else {
        ReceiptCategory::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> TextDocument {
        TextDocument::from_text(text)
    }

    #[test]
    fn test_empty_document_is_unknown() {
        assert_eq!(classify(&doc("")), ReceiptCategory::Unknown);
    }

    #[test]
    fn test_unrelated_text_is_unknown() {
        assert_eq!(
            classify(&doc("random unrelated text with no numbers")),
            ReceiptCategory::Unknown
        );
    }

    #[test]
    fn test_upi_wins_tie_against_digital() {
        // "upi" alone scores 3 for UPI and only the +1 spillover for
        // digital, so the UPI-first rule must pick UpiPayment.
        assert_eq!(classify(&doc("upi")), ReceiptCategory::UpiPayment);
    }

    #[test]
    fn test_printed_receipt() {
        let text = "SuperMart\nBill No: INV-2024-117\n2 x 150\nGrand Total Rs. 450";
        assert_eq!(classify(&doc(text)), ReceiptCategory::PhysicalReceipt);
    }

    #[test]
    fn test_quantity_line_bonus_tips_physical() {
        // "total" alone scores 1 for physical; the quantity line adds 2.
        let with_qty = doc("3 x 40\ntotal 120");
        assert_eq!(classify(&with_qty), ReceiptCategory::PhysicalReceipt);
    }

    #[test]
    fn test_digital_confirmation() {
        let text = "Payment Successful\nTransaction ID: TXN88412345\nDebited from wallet";
        assert_eq!(classify(&doc(text)), ReceiptCategory::DigitalPayment);
    }

    #[test]
    fn test_payment_id_hint_boosts_digital() {
        let text = "payment id: AB12CD34\nreceipt";
        assert_eq!(classify(&doc(text)), ReceiptCategory::DigitalPayment);
    }

    #[test]
    fn test_upi_screenshot() {
        let text = "Paid to Raj Traders\nUPI Ref No 400881234567\nAmount: Rs 1200";
        assert_eq!(classify(&doc(text)), ReceiptCategory::UpiPayment);
    }
}
