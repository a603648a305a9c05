//! Per-screen view builders and the render dispatcher.
//!
//! Each builder is a pure function from the current state to the full textual
//! markup of one screen. [`render`] selects the builder for the current
//! navigation target and returns the entire surface; the front end replaces
//! whatever was displayed before. There is no diffing and no partial update:
//! a full rebuild on every state change is the whole reconciliation strategy,
//! and at this scale it is the right one.

mod doctor_dashboard;
mod doctor_login;
mod home;
mod patient_dashboard;
mod patient_login;
mod registration;

use std::fmt;

use crate::state::{AppState, Screen};

/// Build the full markup for the current screen.
pub fn render(state: &AppState) -> String {
    match state.screen {
        Screen::Home => home::view(state),
        Screen::PatientLogin => patient_login::view(state),
        Screen::PatientRegistration => registration::view(state),
        Screen::PatientDashboard => patient_dashboard::view(state),
        Screen::DoctorLogin => doctor_login::view(state),
        Screen::DoctorDashboard => doctor_dashboard::view(state),
    }
}

pub(crate) const HEAVY_RULE: &str =
    "============================================================";
pub(crate) const LIGHT_RULE: &str =
    "------------------------------------------------------------";

/// Render an optional value, empty when absent (matching an unfilled form
/// field).
pub(crate) fn optional<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Free-text fields fall back to "None reported" on the doctor dashboard.
pub(crate) fn or_none_reported(text: &str) -> &str {
    if text.trim().is_empty() {
        "None reported"
    } else {
        text
    }
}
