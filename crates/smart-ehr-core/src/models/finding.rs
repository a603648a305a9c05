//! Risk and allergy findings derived from document summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity scale shared by risk and allergy findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// A risk flagged by keyword checks against a document summary.
///
/// Derived, not independently stored: findings live only inside the document
/// they were derived for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFinding {
    /// Risk level
    pub level: Severity,
    /// Condition label (e.g. "Cardiovascular Risk")
    pub condition: String,
    /// Free-text detail
    pub detail: String,
}

/// An allergy alert attached to a document.
///
/// The allergen text is copied verbatim from the patient's registered
/// allergies field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllergyFinding {
    /// Allergen text, exactly as the patient registered it
    pub allergen: String,
    /// Alert severity
    pub severity: Severity,
    /// Reaction note
    pub reaction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Low.to_string(), "Low");
        assert_eq!(Severity::Medium.to_string(), "Medium");
        assert_eq!(Severity::High.to_string(), "High");
    }
}
