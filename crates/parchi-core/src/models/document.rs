//! Recognized text input and receipt categories.

use serde::{Deserialize, Serialize};

/// Recognized text from a single receipt image.
///
/// Produced once per image by the text-recognition collaborator and
/// consumed read-only. `lines` and `blocks` preserve reading order;
/// each block spans one or more lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextDocument {
    /// Full recognized text.
    pub full_text: String,

    /// Individual text lines in reading order.
    pub lines: Vec<String>,

    /// Larger text groupings in reading order.
    pub blocks: Vec<String>,
}

impl TextDocument {
    /// Create a document from pre-split recognition output.
    pub fn new(full_text: impl Into<String>, lines: Vec<String>, blocks: Vec<String>) -> Self {
        Self {
            full_text: full_text.into(),
            lines,
            blocks,
        }
    }

    /// Build a document from flat text, deriving lines and blocks.
    ///
    /// Lines split on newlines; blocks split on blank lines. Useful
    /// for callers that only have plain text (CLI input, tests).
    pub fn from_text(text: &str) -> Self {
        let lines = text.lines().map(|l| l.to_string()).collect();

        let blocks = text
            .split("\n\n")
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
            .map(|b| b.to_string())
            .collect();

        Self {
            full_text: text.to_string(),
            lines,
            blocks,
        }
    }

    /// Whether the document contains no text at all.
    pub fn is_empty(&self) -> bool {
        self.full_text.trim().is_empty()
    }
}

/// Coarse classification of a payment record's origin.
///
/// Determined once per document; later extraction stages branch on it
/// but never revise it. Serialized by variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptCategory {
    /// Printed receipt from a physical store.
    PhysicalReceipt,
    /// Digital payment confirmation (app, wallet, net banking).
    DigitalPayment,
    /// UPI transaction screenshot or confirmation.
    UpiPayment,
    /// Nothing recognizable.
    Unknown,
}

impl Default for ReceiptCategory {
    fn default() -> Self {
        Self::Unknown
    }
}

impl ReceiptCategory {
    /// True for the digital family (plain digital or UPI).
    pub fn is_digital(&self) -> bool {
        matches!(self, Self::DigitalPayment | Self::UpiPayment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_derives_lines_and_blocks() {
        let doc = TextDocument::from_text("SuperMart\nBill No: 42\n\nGrand Total 450");

        assert_eq!(doc.lines.len(), 4);
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0], "SuperMart\nBill No: 42");
    }

    #[test]
    fn test_from_text_empty() {
        let doc = TextDocument::from_text("");
        assert!(doc.is_empty());
        assert!(doc.lines.is_empty());
        assert!(doc.blocks.is_empty());
    }

    #[test]
    fn test_category_serializes_by_name() {
        let json = serde_json::to_string(&ReceiptCategory::UpiPayment).unwrap();
        assert_eq!(json, "\"UpiPayment\"");
    }
}
