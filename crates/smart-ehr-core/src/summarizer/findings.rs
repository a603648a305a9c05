//! Risk and allergy derivation from document summaries.

use crate::models::{AllergyFinding, Patient, RiskFinding, Severity};

/// Derive risk and allergy findings for a document.
///
/// Risks come from fixed keyword checks against the summary text; the allergy
/// finding copies the patient's registered allergy text verbatim whenever it
/// is non-empty. Deterministic; the check order fixes the list order.
pub fn derive_findings(
    summary: &str,
    patient: &Patient,
) -> (Vec<RiskFinding>, Vec<AllergyFinding>) {
    let mut risks = Vec::new();
    let mut allergies = Vec::new();

    if summary.contains("cholesterol") || summary.contains("blood sugar") {
        risks.push(RiskFinding {
            level: Severity::Medium,
            condition: "Cardiovascular Risk".into(),
            detail: "Elevated cholesterol levels detected".into(),
        });
    }

    if summary.contains("bronchial") || summary.contains("bronchitis") {
        risks.push(RiskFinding {
            level: Severity::Low,
            condition: "Respiratory Concern".into(),
            detail: "Chronic bronchial condition".into(),
        });
    }

    if patient.has_known_allergies() {
        allergies.push(AllergyFinding {
            allergen: patient.known_allergies.clone(),
            severity: Severity::High,
            reaction: "Avoid prescription".into(),
        });
    }

    (risks, allergies)
}
