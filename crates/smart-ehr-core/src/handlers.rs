//! Event handlers.
//!
//! Every user action runs one of these synchronously to completion against
//! the state tree, after which the caller re-renders the full surface. The
//! only fallible handlers are the two logins; everything else either succeeds
//! or is a deliberate silent no-op.

use thiserror::Error;

use crate::credentials;
use crate::models::{Document, Patient, UploadedBy};
use crate::state::{AppState, Screen};
use crate::summarizer;

/// Login failure: the one user-visible error in the system. The message
/// differs per portal; the credential check does not.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid Patient ID or Password. Please check your credentials.")]
    InvalidPatientCredentials,
    #[error("Invalid Patient ID or Password")]
    InvalidDoctorCredentials,
}

/// Register a new patient from the current draft.
///
/// Generates credentials, stamps the registration date, inserts the record,
/// authenticates it, and lands on the patient dashboard. Performs no
/// validation: required-field gating is the form's job, and an incomplete
/// draft still produces a record when this is called directly.
pub fn register(state: &mut AppState) {
    let id = credentials::generate_patient_id();
    let password = credentials::generate_password();

    let draft = &state.registration;
    let patient = Patient {
        id: id.clone(),
        password,
        name: draft.name.clone(),
        age: draft.age.clone(),
        gender: draft.gender,
        blood_type: draft.blood_type,
        past_conditions: draft.past_conditions.clone(),
        current_medications: draft.current_medications.clone(),
        known_allergies: draft.known_allergies.clone(),
        registration_date: chrono::Local::now().format("%m/%d/%Y").to_string(),
    };

    tracing::info!(patient_id = %id, "registered new patient");
    state.insert_patient(patient);
    state.set_current_patient(&id);
    state.screen = Screen::PatientDashboard;
}

/// Patient login from the transient login fields.
///
/// On failure the state is left untouched and the caller surfaces the error
/// as a blocking alert.
pub fn patient_login(state: &mut AppState) -> Result<(), AuthError> {
    login(state, Screen::PatientDashboard).map_err(|_| AuthError::InvalidPatientCredentials)
}

/// Doctor login. Validates against the same credential store as the patient
/// login: there is a single demo identity space, no doctor role.
pub fn doctor_login(state: &mut AppState) -> Result<(), AuthError> {
    login(state, Screen::DoctorDashboard).map_err(|_| AuthError::InvalidDoctorCredentials)
}

fn login(state: &mut AppState, dashboard: Screen) -> Result<(), ()> {
    let id = state.login.patient_id.clone();
    let matched = state
        .patient(&id)
        .is_some_and(|p| p.password == state.login.password);

    if matched {
        tracing::debug!(patient_id = %id, ?dashboard, "login succeeded");
        state.set_current_patient(&id);
        state.screen = dashboard;
        Ok(())
    } else {
        tracing::debug!(patient_id = %id, "login failed");
        Err(())
    }
}

/// Patient-initiated document upload.
pub fn upload_document(state: &mut AppState, file_name: &str) {
    append_document(state, file_name, None);
}

/// Doctor-initiated document upload; tagged with the uploader marker.
pub fn doctor_upload(state: &mut AppState, file_name: &str) {
    append_document(state, file_name, Some(UploadedBy::Doctor));
}

fn append_document(state: &mut AppState, file_name: &str, uploaded_by: Option<UploadedBy>) {
    // Silent guard: without an authenticated patient there is nowhere to
    // attach the document, so the upload does nothing.
    let Some(patient) = state.current_patient() else {
        tracing::debug!(file_name, "upload ignored, no authenticated patient");
        return;
    };
    let patient_id = patient.id.clone();

    let summary = summarizer::summarize(file_name);
    let (risks, allergies) = summarizer::derive_findings(&summary, patient);
    let medications = summarizer::extract_medications(&summary);

    let mut document = Document::new(file_name.to_string(), summary, risks, allergies, medications);
    document.uploaded_by = uploaded_by;

    tracing::info!(patient_id = %patient_id, file_name, "document uploaded");
    state.append_document(&patient_id, document);
}

/// Navigate to a screen. Entering either login screen clears the transient
/// login fields; no other transition carries guard logic.
pub fn navigate(state: &mut AppState, screen: Screen) {
    if matches!(screen, Screen::PatientLogin | Screen::DoctorLogin) {
        state.login.clear();
    }
    tracing::debug!(?screen, "navigating");
    state.screen = screen;
}

/// Patient logout: clear the session and return home. Idempotent.
pub fn logout(state: &mut AppState) {
    state.clear_current_patient();
    state.login.clear();
    state.screen = Screen::Home;
}

/// Doctor logout: clear the session and return to the doctor login screen.
/// Idempotent.
pub fn doctor_logout(state: &mut AppState) {
    state.clear_current_patient();
    state.login.clear();
    state.screen = Screen::DoctorLogin;
}
