//! Receipt field extraction module.

mod analyzer;
mod rules;

pub use analyzer::ReceiptAnalyzer;
