//! Medication extraction from summary text.

/// Medication names recognized in summaries: antibiotics, anticoagulants,
/// cardiac, diabetes, and hypertension drugs plus common analgesics.
const MEDICATION_KEYWORDS: [&str; 30] = [
    "aspirin",
    "ibuprofen",
    "metformin",
    "lisinopril",
    "atorvastatin",
    "amoxicillin",
    "ciprofloxacin",
    "azithromycin",
    "warfarin",
    "apixaban",
    "rivaroxaban",
    "dabigatran",
    "metoprolol",
    "carvedilol",
    "diltiazem",
    "amlodipine",
    "omeprazole",
    "ranitidine",
    "sertraline",
    "fluoxetine",
    "amitriptyline",
    "gabapentin",
    "naproxen",
    "acetaminophen",
    "tramadol",
    "oxycodone",
    "morphine",
    "insulin",
    "glipizide",
    "glyburide",
];

/// Extract recognized medication names from a summary.
///
/// Matching is case-insensitive; the result is lowercased, sorted, and
/// deduplicated.
pub fn extract_medications(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = MEDICATION_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();
    found.sort();
    found.dedup();
    found
}
