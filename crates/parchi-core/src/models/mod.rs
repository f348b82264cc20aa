//! Data models for recognized text and extracted receipt fields.

pub mod document;
pub mod receipt;
