//! Canned document summarization.
//!
//! Stands in for a real document-analysis service: the uploaded file label is
//! matched case-insensitively against a small fixed set of keyword categories
//! and mapped to one canned summary sentence per category. Every label maps to
//! exactly one summary; unmatched labels get the generic fallback.

mod entities;
mod findings;

pub use entities::*;
pub use findings::*;

/// Keyword categories and their canned summaries, checked in order.
const SUMMARIES: [(&str, &str); 4] = [
    (
        "blood",
        "Blood work shows elevated cholesterol (220 mg/dL) and slightly high blood sugar \
         (115 mg/dL). Liver and kidney function normal. Vitamin D deficiency detected.",
    ),
    (
        "x-ray",
        "Chest X-ray reveals mild bronchial thickening consistent with chronic bronchitis. \
         No signs of pneumonia or masses. Heart size normal.",
    ),
    (
        "prescription",
        "Patient prescribed Metformin 500mg (2x daily) for blood sugar management and \
         Atorvastatin 10mg (1x nightly) for cholesterol control. 3-month follow-up recommended.",
    ),
    (
        "ecg",
        "ECG shows normal sinus rhythm at 72 bpm. No signs of arrhythmia or ischemia. \
         PR interval and QT interval within normal limits.",
    ),
];

const FALLBACK_SUMMARY: &str =
    "Medical document analyzed. Key findings extracted and stored in patient record.";

/// Summarize a document by its file label.
pub fn summarize(file_name: &str) -> String {
    let label = file_name.to_lowercase();
    SUMMARIES
        .iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|(_, summary)| (*summary).to_string())
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_matches_keywords() {
        assert!(summarize("Blood Test Report - 01/01/2026").contains("elevated cholesterol"));
        assert!(summarize("X-Ray Report - 01/01/2026").contains("bronchial thickening"));
        assert!(summarize("Prescription - 01/01/2026").contains("Metformin 500mg"));
        assert!(summarize("ECG Report - 01/01/2026").contains("normal sinus rhythm"));
    }

    #[test]
    fn test_summarize_is_case_insensitive() {
        assert_eq!(summarize("BLOOD panel"), summarize("blood panel"));
        assert!(summarize("ecg strip").contains("sinus rhythm"));
    }

    #[test]
    fn test_summarize_fallback() {
        assert_eq!(summarize("Discharge Note"), FALLBACK_SUMMARY);
        assert_eq!(summarize(""), FALLBACK_SUMMARY);
    }

    #[test]
    fn test_summarize_is_total_and_deterministic() {
        let label = "Blood Test Report";
        assert_eq!(summarize(label), summarize(label));
    }
}
