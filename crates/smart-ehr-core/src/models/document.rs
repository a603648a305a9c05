//! Medical document model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::finding::{AllergyFinding, RiskFinding};

/// Marker for documents added by someone other than the record owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadedBy {
    Doctor,
}

impl fmt::Display for UploadedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadedBy::Doctor => write!(f, "Doctor"),
        }
    }
}

/// An uploaded medical document. Immutable once appended to a patient's
/// document list; the list itself is append-only and order-preserving.
///
/// No real file bytes are involved anywhere: a document is a descriptive
/// label plus the canned analysis derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique document ID, generated at upload
    pub id: String,
    /// Caller-supplied display file name, usually including a date string
    pub file_name: String,
    /// Upload date display string
    pub upload_date: String,
    /// Canned summary produced by keyword lookup on the file name
    pub summary: String,
    /// Risk findings derived from the summary, in derivation order
    pub risks: Vec<RiskFinding>,
    /// Allergy findings derived from the patient's registered data
    pub allergies: Vec<AllergyFinding>,
    /// Medication names recognized in the summary text
    pub medications: Vec<String>,
    /// Set only for doctor-initiated uploads
    pub uploaded_by: Option<UploadedBy>,
}

impl Document {
    /// Create a new document with a fresh ID and today's date stamp.
    pub fn new(
        file_name: String,
        summary: String,
        risks: Vec<RiskFinding>,
        allergies: Vec<AllergyFinding>,
        medications: Vec<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            file_name,
            upload_date: chrono::Local::now().format("%m/%d/%Y").to_string(),
            summary,
            risks,
            allergies,
            medications,
            uploaded_by: None,
        }
    }
}
