//! Rule-based field extractors for receipt text.

pub mod amounts;
pub mod classifier;
pub mod description;
pub mod patterns;
pub mod reference;

/// Normalize an extracted string for the output record.
///
/// Strips characters outside letters/digits/punctuation/whitespace,
/// collapses whitespace runs to single spaces, and trims. Idempotent:
/// `cleanup(cleanup(s)) == cleanup(s)`.
pub fn cleanup(s: &str) -> String {
    let filtered: String = s
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || c.is_ascii_punctuation())
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}
