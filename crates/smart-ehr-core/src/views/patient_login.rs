//! Patient login screen for existing patients.

use super::LIGHT_RULE;
use crate::state::AppState;

pub(super) fn view(state: &AppState) -> String {
    let mut out = String::new();

    out.push_str("  [back] Back to Home\n");
    out.push_str(&format!("{}\n", LIGHT_RULE));
    out.push_str("  PATIENT LOGIN\n");
    out.push_str("  Enter your credentials to access your health records\n\n");

    out.push_str(&format!("  Patient ID: {}\n", state.login.patient_id));
    out.push_str(&format!("  Password:   {}\n\n", state.login.password));

    out.push_str("  Your data is encrypted and secure.\n");
    out.push_str("  Don't have an account? Use [register] to create one.\n");

    if state.patient_count() > 0 {
        out.push_str("\n  Demo Patients Available for Testing:\n");
        for patient in state.patients_in_order() {
            out.push_str(&format!(
                "    {} - ID: {} | Pass: {}\n",
                patient.name, patient.id, patient.password
            ));
        }
    }

    out.push_str("\n  Commands: id <patient id>, pass <password>, login, register, back\n");
    if !state.login.is_filled() {
        out.push_str("  (login is available once both fields are filled)\n");
    }

    out
}
