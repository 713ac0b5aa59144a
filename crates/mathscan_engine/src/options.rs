use crate::format::DEFAULT_SIGNIFICANT_DIGITS;

/// Knobs for formatting and the scan pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Significant digits kept for non-integer values (clamped to 1..=17).
    pub significant_digits: usize,
    /// Marker placed on both sides of the typeset answer.
    pub math_delimiter: String,
    /// Strip OCR artifacts (`|`, `___`, `.....`) before detection.
    pub clean_ocr_text: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            math_delimiter: "$$".to_string(),
            clean_ocr_text: true,
        }
    }
}
