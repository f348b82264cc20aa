//! Inbound boundary to the text-recognition collaborator.

use crate::error::Result;
use crate::models::document::TextDocument;

/// A source of recognized text documents.
///
/// Implementations wrap whatever recognition backend turns an image
/// into text (on-device ML kit, cloud OCR, test fixtures). A failed
/// recognition returns [`ParchiError::RecognitionFailed`]; callers
/// surface that error directly and never hand a partial document to
/// the analyzer.
///
/// [`ParchiError::RecognitionFailed`]: crate::error::ParchiError::RecognitionFailed
pub trait TextSource {
    /// Recognize text from raw image bytes.
    fn recognize(&self, image: &[u8]) -> Result<TextDocument>;
}
