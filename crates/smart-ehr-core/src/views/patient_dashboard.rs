//! Patient dashboard: credentials, upload triggers, and document history.

use super::{HEAVY_RULE, LIGHT_RULE};
use crate::models::Document;
use crate::state::AppState;

pub(super) fn view(state: &AppState) -> String {
    let Some(patient) = state.current_patient() else {
        return "  No authenticated patient.\n\n  Commands: logout\n".to_string();
    };
    let documents = state.current_documents();
    let mut out = String::new();

    out.push_str(&format!("{}\n", HEAVY_RULE));
    out.push_str(&format!("  Welcome, {}\n", patient.name));
    out.push_str("  Patient Dashboard\n");
    out.push_str(&format!("{}\n\n", HEAVY_RULE));

    out.push_str("  YOUR CREDENTIALS\n");
    out.push_str(&format!("    Patient ID : {}\n", patient.id));
    out.push_str(&format!("    Password   : {}\n", patient.password));
    out.push_str("  Important: Save these credentials securely. Share them only\n");
    out.push_str("  with your healthcare providers.\n\n");

    out.push_str("  UPLOAD MEDICAL DOCUMENTS\n");
    out.push_str("  Upload prescriptions, lab reports, or medical records for AI analysis\n");
    out.push_str("    [1] Upload Blood Test\n");
    out.push_str("    [2] Upload X-Ray\n");
    out.push_str("    [3] Upload Prescription\n");
    out.push_str("    [4] Upload ECG\n");

    if !documents.is_empty() {
        out.push_str("\n  YOUR MEDICAL DOCUMENTS\n");
        for document in documents {
            out.push_str(&document_card(document));
        }
    }

    out.push_str("\n  Commands: 1, 2, 3, 4, logout\n");

    out
}

fn document_card(document: &Document) -> String {
    let mut out = String::new();

    out.push_str(&format!("  {}\n", LIGHT_RULE));
    out.push_str(&format!("  Document: {}\n", document.file_name));
    out.push_str(&format!("  Uploaded: {}\n", document.upload_date));
    out.push_str("  AI Summary:\n");
    out.push_str(&format!("    {}\n", document.summary));

    if !document.risks.is_empty() {
        out.push_str("  Detected Risks:\n");
        for risk in &document.risks {
            out.push_str(&format!(
                "    - {} ({} Risk): {}\n",
                risk.condition, risk.level, risk.detail
            ));
        }
    }

    if !document.allergies.is_empty() {
        out.push_str("  Allergy Alerts:\n");
        for allergy in &document.allergies {
            out.push_str(&format!(
                "    - {} ({} Severity): {}\n",
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
