//! Smart EHR Portal Core
//!
//! In-memory demo of an electronic health record portal: patients register
//! and receive generated credentials, documents are "summarized" by canned
//! keyword lookup, and doctors view records using patient credentials. All
//! data lives in one state tree for the lifetime of the session; there is no
//! persistence, no network, and no real document analysis.
//!
//! # Architecture
//!
//! ```text
//! User action ──▶ handler (&mut AppState) ──▶ state tree mutated
//!                                                    │
//!                                         views::render(&AppState)
//!                                                    │
//!                                     full surface rebuilt and displayed
//! ```
//!
//! Control flow is strictly unidirectional and synchronous: a handler runs to
//! completion, then the front end rebuilds the entire visible surface from
//! current state. No diffing, no partial updates, no background work.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Document, findings)
//! - [`state`]: The state tree: registry, documents, session, form fields
//! - [`credentials`]: Random identifier and password generation
//! - [`summarizer`]: Canned summaries, risk/allergy derivation, medication extraction
//! - [`handlers`]: State mutations for every user action
//! - [`views`]: Pure per-screen view builders and the render dispatcher

pub mod credentials;
pub mod handlers;
pub mod models;
pub mod state;
pub mod summarizer;
pub mod views;

// Re-export commonly used types
pub use handlers::AuthError;
pub use models::{
    AllergyFinding, BloodType, Document, Gender, Patient, RiskFinding, Severity, UploadedBy,
};
pub use state::{AppState, LoginForm, RegistrationDraft, Screen};
