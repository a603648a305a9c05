//! Doctor dashboard: patient overview, doctor-initiated uploads, and the full
//! medical history.

use super::{optional, or_none_reported, HEAVY_RULE, LIGHT_RULE};
use crate::models::Document;
use crate::state::AppState;

pub(super) fn view(state: &AppState) -> String {
    let Some(patient) = state.current_patient() else {
        return "  No authenticated patient.\n\n  Commands: logout\n".to_string();
    };
    let documents = state.current_documents();
    let mut out = String::new();

    out.push_str(&format!("{}\n", HEAVY_RULE));
    out.push_str("  DOCTOR DASHBOARD\n");
    out.push_str(&format!("  Patient: {}\n", patient.name));
    out.push_str(&format!("{}\n\n", HEAVY_RULE));

    out.push_str(&format!("  Patient ID : {}\n", patient.id));
    out.push_str(&format!(
        "  Age/Gender : {} / {}\n",
        patient.age,
        optional(patient.gender)
    ));
    out.push_str(&format!(
        "  Blood Type : {}\n\n",
        optional(patient.blood_type)
    ));

    out.push_str("  PAST CONDITIONS\n");
    out.push_str(&format!(
        "    {}\n",
        or_none_reported(&patient.past_conditions)
    ));
    out.push_str("  CURRENT MEDICATIONS\n");
    out.push_str(&format!(
        "    {}\n",
        or_none_reported(&patient.current_medications)
    ));
    out.push_str("  KNOWN ALLERGIES\n");
    out.push_str(&format!(
        "    {}\n\n",
        or_none_reported(&patient.known_allergies)
    ));

    out.push_str("  UPLOAD NEW MEDICAL REPORT\n");
    out.push_str("  Add new prescriptions or test results to patient record\n");
    out.push_str("    [1] Add Prescription\n");
    out.push_str("    [2] Add Lab Results\n\n");

    out.push_str("  PATIENT MEDICAL HISTORY\n");
    if documents.is_empty() {
        out.push_str("    No documents uploaded yet\n");
    } else {
        for document in documents {
            out.push_str(&document_card(document));
        }
    }

    out.push_str("\n  Commands: 1, 2, logout\n");

    out
}

fn document_card(document: &Document) -> String {
    let mut out = String::new();

    out.push_str(&format!("  {}\n", LIGHT_RULE));
    out.push_str(&format!("  Document: {}\n", document.file_name));
    match document.uploaded_by {
        Some(uploader) => out.push_str(&format!(
            "  {} | Uploaded by {}\n",
            document.upload_date, uploader
        )),
        None => out.push_str(&format!("  {}\n", document.upload_date)),
    }
    out.push_str("  AI-Generated Summary:\n");
    out.push_str(&format!("    {}\n", document.summary));

    if !document.risks.is_empty() {
        out.push_str("  Risk Assessment:\n");
        for risk in &document.risks {
            out.push_str(&format!(
                "    - {} ({} Risk): {}\n",
                risk.condition, risk.level, risk.detail
            ));
        }
    }

    if !document.allergies.is_empty() {
        out.push_str("  Critical Allergy Alerts:\n");
        for allergy in &document.allergies {
            out.push_str(&format!(
                "    - {} ({}): {}\n",
                allergy.allergen, allergy.severity, allergy.reaction
            ));
        }
    }

    if !document.medications.is_empty() {
        out.push_str(&format!(
            "  Medications: {}\n",
            document.medications.join(", ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers;
    use crate::models::{BloodType, Gender};

    fn jane_state() -> AppState {
        let mut state = AppState::new();
        state.registration.name = "Jane Doe".into();
        state.registration.age = "30".into();
        state.registration.gender = Some(Gender::Female);
        state.registration.blood_type = Some(BloodType::OPositive);
        handlers::register(&mut state);
        state
    }

    #[test]
    fn test_patient_overview() {
        let state = jane_state();
        let markup = view(&state);
        assert!(markup.contains("Patient: Jane Doe"));
        assert!(markup.contains("Age/Gender : 30 / Female"));
        assert!(markup.contains("Blood Type : O+"));
        assert!(markup.contains("None reported"));
        assert!(markup.contains("No documents uploaded yet"));
    }

    #[test]
    fn test_doctor_upload_shows_marker() {
        let mut state = jane_state();
        handlers::doctor_upload(&mut state, "Lab Results - 01/01/2026");
        handlers::upload_document(&mut state, "ECG Report - 01/01/2026");

        let markup = view(&state);
        assert!(markup.contains("Uploaded by Doctor"));
        assert!(markup.contains("AI-Generated Summary:"));
        // The patient-initiated document carries no marker.
        assert_eq!(markup.matches("Uploaded by Doctor").count(), 1);
    }
}
