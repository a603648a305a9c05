//! Patient registration screen.

use super::{optional, LIGHT_RULE};
use crate::models::{BloodType, Gender};
use crate::state::AppState;

pub(super) fn view(state: &AppState) -> String {
    let draft = &state.registration;
    let mut out = String::new();

    out.push_str("  [back] Back to Home\n");
    out.push_str(&format!("{}\n", LIGHT_RULE));
    out.push_str("  PATIENT REGISTRATION\n");
    out.push_str("  Already have an account? Use [login].\n\n");

    out.push_str(&format!("  Full Name *  : {}\n", draft.name));
    out.push_str(&format!("  Age *        : {}\n", draft.age));
    out.push_str(&format!(
        "  Gender *     : {:<8} (options: {})\n",
        optional(draft.gender),
        option_list(&Gender::ALL)
    ));
    out.push_str(&format!(
        "  Blood Type * : {:<8} (options: {})\n",
        optional(draft.blood_type),
        option_list(&BloodType::ALL)
    ));
    out.push_str(&format!(
        "  Past Medical Conditions : {}\n",
        draft.past_conditions
    ));
    out.push_str(&format!(
        "  Current Medications     : {}\n",
        draft.current_medications
    ));
    out.push_str(&format!(
        "  Known Allergies (!)     : {}\n",
        draft.known_allergies
    ));

    out.push_str("\n  Commands: name <v>, age <v>, gender <v>, blood <v>,\n");
    out.push_str("            conditions <v>, medications <v>, allergies <v>,\n");
    out.push_str("            submit, login, back\n");
    if !draft.is_complete() {
        out.push_str("  (submit is available once all required fields are filled)\n");
    }

    out
}

fn option_list<T: std::fmt::Display>(options: &[T]) -> String {
    options
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
