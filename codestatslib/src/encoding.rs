//! Text-encoding resolution from leading file bytes.
//!
//! Detection runs over at most the first [`SAMPLE_SIZE`] bytes and only a
//! guess with confidence at or above [`CONFIDENCE_THRESHOLD`] resolves. A
//! file whose encoding does not resolve is treated as unreadable text by the
//! line counter, not as an error.

use encoding_rs::Encoding;

/// Minimum detector confidence for a guess to count.
pub const CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Number of leading bytes sampled for detection.
pub const SAMPLE_SIZE: usize = 1024;

/// Resolve the best-guess encoding for a byte sample.
///
/// Returns `None` when the detector is not confident enough or the detected
/// charset has no corresponding decoder.
pub fn resolve(sample: &[u8]) -> Option<&'static Encoding> {
    if sample.is_empty() {
        return Some(encoding_rs::UTF_8);
    }
    let (charset, confidence, _) = chardet::detect(sample);
    if confidence < CONFIDENCE_THRESHOLD {
        return None;
    }
    Encoding::for_label(chardet::charset2encoding(&charset).as_bytes())
}
