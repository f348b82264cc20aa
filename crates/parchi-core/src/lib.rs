//! Core library for receipt scanning.
//!
//! This crate provides:
//! - Receipt category classification (printed receipt, digital payment, UPI)
//! - Reference/serial number extraction
//! - Confidence-scored amount extraction
//! - Merchant/description extraction
//!
//! Text recognition is an external concern: callers obtain a
//! [`TextDocument`] from an image (see [`TextSource`]) and hand it to
//! [`ReceiptAnalyzer::analyze`], which is pure and never fails.

pub mod error;
pub mod models;
pub mod receipt;
pub mod source;

pub use error::{ParchiError, Result};
pub use models::document::{ReceiptCategory, TextDocument};
pub use models::receipt::ReceiptData;
pub use receipt::ReceiptAnalyzer;
pub use source::TextSource;
