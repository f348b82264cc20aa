//! Extracted receipt data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document::ReceiptCategory;

/// Structured fields extracted from one receipt document.
///
/// Created fresh per [`analyze`] call and owned by the caller; the
/// engine keeps no reference to it. Absent fields use the sentinel
/// encoding existing consumers expect: `""` for the reference number
/// and description, zero for the amount.
///
/// [`analyze`]: crate::receipt::ReceiptAnalyzer::analyze
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Full recognized text the fields were extracted from.
    pub full_text: String,

    /// Bill/transaction/UTR identifier, or `""` if none was found.
    pub reference_number: String,

    /// Extracted amount, or zero if none was found.
    pub amount: Decimal,

    /// Merchant name, payee, or representative text, or `""`.
    pub description: String,

    /// Classified receipt category.
    pub category: ReceiptCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_sentinels() {
        let data = ReceiptData::default();

        assert_eq!(data.reference_number, "");
        assert_eq!(data.amount, Decimal::ZERO);
        assert_eq!(data.description, "");
        assert_eq!(data.category, ReceiptCategory::Unknown);
    }

    #[test]
    fn test_roundtrip_json() {
        let data = ReceiptData {
            full_text: "Grand Total Rs. 450".to_string(),
            reference_number: "INV-2024-117".to_string(),
            amount: Decimal::new(450, 0),
            description: "SuperMart".to_string(),
            category: ReceiptCategory::PhysicalReceipt,
        };

        let json = serde_json::to_string(&data).unwrap();
        let back: ReceiptData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
