//! Doctor login screen. Doctors authenticate with patient credentials; there
//! is a single identity space.

use super::LIGHT_RULE;
use crate::state::AppState;

pub(super) fn view(state: &AppState) -> String {
    let mut out = String::new();

    out.push_str("  [back] Back to Home\n");
    out.push_str(&format!("{}\n", LIGHT_RULE));
    out.push_str("  DOCTOR PORTAL\n");
    out.push_str("  Enter patient credentials to access their records\n\n");

    out.push_str(&format!("  Patient ID:       {}\n", state.login.patient_id));
    out.push_str(&format!("  Patient Password: {}\n\n", state.login.password));

    out.push_str("  All access is logged for patient privacy and security.\n");

    if state.patient_count() > 0 {
        out.push_str("\n  Demo Patients Available:\n");
        for patient in state.patients_in_order() {
            out.push_str(&format!(
                "    ID: {} | Pass: {}\n",
                patient.id, patient.password
            ));
        }
    }

    out.push_str("\n  Commands: id <patient id>, pass <password>, login, back\n");
    if !state.login.is_filled() {
        out.push_str("  (login is available once both fields are filled)\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers;
    use crate::state::Screen;

    #[test]
    fn test_demo_list_omits_names() {
        let mut state = AppState::new();
        state.registration.name = "Jane Doe".into();
        handlers::register(&mut state);
        let id = state.current_patient().unwrap().id.clone();
        handlers::navigate(&mut state, Screen::DoctorLogin);

        let markup = view(&state);
        assert!(markup.contains("Demo Patients Available:"));
        assert!(markup.contains(&format!("ID: {}", id)));
        // Unlike the patient login, the doctor list shows credentials only.
        assert!(!markup.contains("Jane Doe"));
    }
}
