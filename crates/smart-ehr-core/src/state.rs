//! Application state tree.
//!
//! One mutable tree owns everything: the patient registry, per-patient
//! document lists, the authenticated session, and the transient form fields.
//! Handlers take it by `&mut` explicitly; there is no global.

use std::collections::HashMap;

use crate::models::{BloodType, Document, Gender, Patient};

/// Navigation targets. Any screen can be requested from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    PatientLogin,
    PatientRegistration,
    PatientDashboard,
    DoctorLogin,
    DoctorDashboard,
}

/// Transient credential-entry fields, shared in shape by the patient and
/// doctor login screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub patient_id: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields non-empty; the login button is disabled until then.
    pub fn is_filled(&self) -> bool {
        !self.patient_id.is_empty() && !self.password.is_empty()
    }

    pub fn clear(&mut self) {
        self.patient_id.clear();
        self.password.clear();
    }
}

/// Transient registration form draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub blood_type: Option<BloodType>,
    pub past_conditions: String,
    pub current_medications: String,
    pub known_allergies: String,
}

impl RegistrationDraft {
    /// Required-field gating as the registration form applies it. The
    /// registration handler itself never checks this and will happily build a
    /// record from an incomplete draft.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.age.is_empty()
            && self.gender.is_some()
            && self.blood_type.is_some()
    }
}

/// The whole state tree for one portal session.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current navigation target
    pub screen: Screen,
    /// Transient login fields
    pub login: LoginForm,
    /// Transient registration draft
    pub registration: RegistrationDraft,
    /// Registry: patient ID to record. Append-only.
    patients: HashMap<String, Patient>,
    /// Registration order, so listings stay deterministic
    registration_order: Vec<String>,
    /// Per-patient document lists. Append-only, insertion order = display order.
    documents: HashMap<String, Vec<Document>>,
    /// Authenticated patient, held as a lookup key into the registry
    current_patient: Option<String>,
}

impl AppState {
    /// Fresh state: home screen, empty registry, no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new patient and initialize its empty document list.
    pub fn insert_patient(&mut self, patient: Patient) {
        let id = patient.id.clone();
        self.documents.entry(id.clone()).or_default();
        self.registration_order.push(id.clone());
        self.patients.insert(id, patient);
    }

    /// Look up a patient by ID.
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    /// All registered patients, in registration order.
    pub fn patients_in_order(&self) -> impl Iterator<Item = &Patient> {
        self.registration_order
            .iter()
            .filter_map(|id| self.patients.get(id))
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// The authenticated patient's record, if any.
    pub fn current_patient(&self) -> Option<&Patient> {
        self.current_patient
            .as_deref()
            .and_then(|id| self.patients.get(id))
    }

    pub fn set_current_patient(&mut self, id: &str) {
        self.current_patient = Some(id.to_string());
    }

    pub fn clear_current_patient(&mut self) {
        self.current_patient = None;
    }

    /// Documents for a patient, in upload order. Empty for unknown IDs.
    pub fn documents_for(&self, id: &str) -> &[Document] {
        self.documents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Documents for the authenticated patient.
    pub fn current_documents(&self) -> &[Document] {
        self.current_patient
            .as_deref()
            .map(|id| self.documents_for(id))
            .unwrap_or(&[])
    }

    /// Append a document to a patient's list. The patient must already be in
    /// the registry; upload handlers guarantee that.
    pub fn append_document(&mut self, patient_id: &str, document: Document) {
        debug_assert!(self.patients.contains_key(patient_id));
        self.documents
            .entry(patient_id.to_string())
            .or_default()
            .push(document);
    }
}
