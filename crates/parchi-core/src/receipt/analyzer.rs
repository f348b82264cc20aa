//! Receipt analyzer combining classification and field extraction.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::document::TextDocument;
use crate::models::receipt::ReceiptData;

use super::rules::{amounts, classifier, description, reference};

/// Heuristic receipt analyzer.
///
/// Stateless and pure: every call depends only on the input document,
/// so a single analyzer can serve concurrent callers without locking.
/// `analyze` is total; fields that cannot be extracted come back as
/// their "not found" sentinels rather than errors.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptAnalyzer;

impl ReceiptAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Extract structured fields from a recognized document.
    ///
    /// Classification runs first; the reference, amount, and
    /// description extractors branch on the resulting category but
    /// never revise it.
    pub fn analyze(&self, doc: &TextDocument) -> ReceiptData {
        let category = classifier::classify(doc);
        debug!(?category, chars = doc.full_text.len(), "classified receipt");

        let reference = reference::extract_reference(doc, category);
        let amount = amounts::extract_amount(doc, category);
        let description = description::extract_description(doc, category);

        if let Some((value, confidence)) = &amount {
            debug!(%value, confidence, "selected amount candidate");
        }

        ReceiptData {
            full_text: doc.full_text.clone(),
            reference_number: reference.unwrap_or_default(),
            amount: amount.map(|(value, _)| value).unwrap_or(Decimal::ZERO),
            description: description.unwrap_or_default(),
            category,
        }
    }
}

impl Default for ReceiptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::ReceiptCategory;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn analyze(text: &str) -> ReceiptData {
        ReceiptAnalyzer::new().analyze(&TextDocument::from_text(text))
    }

    #[test]
    fn test_physical_receipt_end_to_end() {
        let result = analyze("SuperMart\nBill No: INV-2024-117\n2 x 150\nGrand Total Rs. 450");

        assert_eq!(result.category, ReceiptCategory::PhysicalReceipt);
        assert_eq!(result.reference_number, "INV-2024-117");
        assert_eq!(result.amount, Decimal::from_str("450").unwrap());
        assert_eq!(result.description, "SuperMart");
    }

    #[test]
    fn test_upi_payment_end_to_end() {
        let result = analyze("Paid to Raj Traders\nUPI Ref No 400881234567\nAmount: Rs 1200");

        assert_eq!(result.category, ReceiptCategory::UpiPayment);
        assert_eq!(result.reference_number, "400881234567");
        assert_eq!(result.amount, Decimal::from_str("1200").unwrap());
        assert_eq!(result.description, "Raj Traders");
    }

    #[test]
    fn test_no_extractable_data() {
        let text = "random unrelated text with no numbers";
        let result = analyze(text);

        assert_eq!(result.category, ReceiptCategory::Unknown);
        assert_eq!(result.reference_number, "");
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.description, text);
    }

    #[test]
    fn test_empty_document_is_total() {
        let result = analyze("");

        assert_eq!(
            result,
            ReceiptData {
                full_text: String::new(),
                reference_number: String::new(),
                amount: Decimal::ZERO,
                description: String::new(),
                category: ReceiptCategory::Unknown,
            }
        );
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let doc = TextDocument::from_text(
            "Payment Successful\nTransaction ID: TXN88412345\nAmount: Rs 249.50\nPaid to BookDepot",
        );
        let analyzer = ReceiptAnalyzer::new();

        assert_eq!(analyzer.analyze(&doc), analyzer.analyze(&doc));
    }

    #[test]
    fn test_digital_confirmation_end_to_end() {
        let result = analyze(
            "Payment Successful\nTransaction ID: TXN88412345\nAmount: Rs 249.50\nPaid to BookDepot",
        );

        assert_eq!(result.category, ReceiptCategory::DigitalPayment);
        assert_eq!(result.reference_number, "TXN88412345");
        assert_eq!(result.amount, Decimal::from_str("249.50").unwrap());
        assert_eq!(result.description, "BookDepot");
    }
}
