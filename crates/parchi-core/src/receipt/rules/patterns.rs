//! Common regex patterns for receipt field extraction.
//!
//! Cascades are ordered vectors evaluated first-match-wins; broader
//! patterns sit at the end of each list, so the order here is part of
//! the extraction contract.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Structural classifier hints
    pub static ref QUANTITY_LINE: Regex = Regex::new(
        r"\b\d+[ \t]*[xX*][ \t]*\d+\b"
    ).unwrap();

    pub static ref PAYMENT_ID_HINT: Regex = Regex::new(
        r"(?i)payment\s*id\s*[:\-]?\s*[A-Za-z0-9]+"
    ).unwrap();

    // Reference cascade for digital/UPI payments.
    // Tokens are alphanumeric, length >= 6, internal hyphens allowed.
    pub static ref DIGITAL_REFERENCE_CASCADE: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:order|txn|transaction|payment)\s*id\s*[:#.\-]?\s*([A-Za-z0-9][A-Za-z0-9\-]{4,}[A-Za-z0-9])").unwrap(),
        Regex::new(r"(?i)\b(?:reference|ref|utr)\s*(?:no|number|num)?\s*[:#.\-]?\s*([A-Za-z0-9][A-Za-z0-9\-]{4,}[A-Za-z0-9])").unwrap(),
        Regex::new(r"(?i)\b(?:upi|payment)\s*ref(?:erence)?\s*(?:no|number|num)?\s*[:#.\-]?\s*([A-Za-z0-9][A-Za-z0-9\-]{4,}[A-Za-z0-9])").unwrap(),
        Regex::new(r"(?i)\b(?:txnid|id)\s*[:#.\-]?\s*([A-Za-z0-9][A-Za-z0-9\-]{4,}[A-Za-z0-9])").unwrap(),
        Regex::new(r"(?i)\b(?:txn|transaction)\s*(?:id|ref)?\s*:\s*([A-Za-z0-9][A-Za-z0-9\-]{4,}[A-Za-z0-9])").unwrap(),
    ];

    // Whole-line token for the digital fallback scan.
    pub static ref STANDALONE_TOKEN: Regex = Regex::new(
        r"^([A-Za-z0-9]{6,20})$"
    ).unwrap();

    // Reference cascade for printed receipts.
    // Tokens are length >= 4, hyphens and slashes allowed.
    pub static ref PHYSICAL_REFERENCE_CASCADE: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:bill|invoice|receipt)\s*(?:no|number|num|#)?\s*[:#.\-]?\s*([A-Za-z0-9][A-Za-z0-9/\-]{2,}[A-Za-z0-9])").unwrap(),
        Regex::new(r"(?i)\b(?:serial|s\.?\s*n\.?)\s*(?:no|number)?\s*[:#.\-]?\s*([A-Za-z0-9][A-Za-z0-9/\-]{2,}[A-Za-z0-9])").unwrap(),
        Regex::new(r"#\s*([A-Za-z0-9][A-Za-z0-9/\-]{2,}[A-Za-z0-9])").unwrap(),
        Regex::new(r"(?i)\b(?:gstin|gst|cin|tin)\s*(?:no|number)?\s*[:#.\-]?\s*([A-Za-z0-9]{4,})").unwrap(),
    ];

    // Whole-line fallback for printed receipts ("#1234", "No. 8812").
    pub static ref PHYSICAL_LINE_FALLBACK: Regex = Regex::new(
        r"(?i)^#?\s*(?:no[.:]?\s*)?(\w{4,})$"
    ).unwrap();

    // Generic reference cascade for unclassified documents.
    pub static ref GENERIC_REFERENCE_CASCADE: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:serial|bill|receipt|transaction)\s*(?:no|number|id)?\s*[:#.\-]?\s*([A-Za-z0-9][A-Za-z0-9/\-]{2,}[A-Za-z0-9])").unwrap(),
        Regex::new(r"#\s*([A-Za-z0-9][A-Za-z0-9/\-]{2,}[A-Za-z0-9])").unwrap(),
    ];

    // Generic amount candidates: currency-anchored and keyword-anchored
    // number patterns, each capturing the numeric text in group 1.
    pub static ref GENERIC_AMOUNT_PATTERNS: Vec<Regex> = vec![
        // Symbol before number: "Rs. 450", "₹1,200.50", "INR 99"
        Regex::new(r"(?i)(?:₹|\brs\.?|\binr\b)\s*([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)").unwrap(),
        // Number before symbol: "450/-", "1200 ₹", "99 rupees"
        Regex::new(r"(?i)\b([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)\s*(?:₹|/-|rs\b|inr\b|rupees\b)").unwrap(),
        // Total/amount/sum keyword followed by a number
        Regex::new(r"(?i)\b(?:total|amount|sum)\b\s*[:\-]?\s*(?:₹|rs\.?|inr)?\s*([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)").unwrap(),
        // Spelled-out currency: "rupees 450"
        Regex::new(r"(?i)\brupees\s*[:\-]?\s*([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)").unwrap(),
        // Comma-grouped number: "1,234.56", "12,500"
        Regex::new(r"\b([0-9]{1,3}(?:,[0-9]{2,3})+(?:\.[0-9]{1,2})?)\b").unwrap(),
    ];

    // First number on a line, for labeled-total lines.
    pub static ref FIRST_NUMBER: Regex = Regex::new(
        r"([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)"
    ).unwrap();

    // Labeled amount on digital confirmations: "Amount: Rs 1200", "Paid: 450"
    pub static ref DIGITAL_AMOUNT: Regex = Regex::new(
        r"(?i)\b(?:transaction\s+amount|amount|paid)\s*[:\-]\s*(?:₹|rs\.?|inr)?\s*([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)"
    ).unwrap();

    // Looser patterns for unclassified documents.
    pub static ref LOOSE_AMOUNT_LABEL: Regex = Regex::new(
        r"(?i)\b(?:amount|total|price)\b\s*[:\-]?\s*(?:₹|rs\.?|inr)?\s*([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)"
    ).unwrap();

    pub static ref LOOSE_AMOUNT_SUFFIX: Regex = Regex::new(
        r"(?i)\b([0-9]+(?:,[0-9]+)*(?:\.[0-9]{1,2})?)\s*(?:/-|rs\b|only\b)"
    ).unwrap();

    // Last-resort scan: any number shortly after a currency symbol,
    // tolerating junk the stricter generic patterns reject.
    pub static ref BARE_CURRENCY_NUMBER: Regex = Regex::new(
        r"(?i)(?:₹|\brs\.?|\binr\b)[^0-9\n]{0,10}([0-9][0-9,]*(?:\.[0-9]+)?)"
    ).unwrap();

    // Description patterns for digital/UPI payments.
    pub static ref PAID_TO: Regex = Regex::new(
        r"(?i)\bpaid\s+to\b\s*[:\-]?\s*(.+)"
    ).unwrap();

    pub static ref RECIPIENT_LABEL: Regex = Regex::new(
        r"(?i)\b(?:recipient|merchant|payee|to)\s*[:\-]\s*(.+)"
    ).unwrap();

    // VPA / email-like handle: "rajtraders@oksbi"
    pub static ref VPA_HANDLE: Regex = Regex::new(
        r"([A-Za-z0-9._\-]+)@[A-Za-z0-9.\-]+"
    ).unwrap();

    // Item-list section boundaries on printed receipts.
    pub static ref ITEM_SECTION_START: Regex = Regex::new(
        r"(?i)\b(?:items?|description|qty|quantity|products?)\b"
    ).unwrap();

    pub static ref ITEM_SECTION_END: Regex = Regex::new(
        r"(?i)\b(?:total|subtotal|sum|amount|tax|gst)\b"
    ).unwrap();
}
