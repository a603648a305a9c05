//! Patient record model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender options offered on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All options, in the order the registration form lists them.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Parse a form value, case-insensitively. Unrecognized input is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Blood type options offered on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodType {
    /// All options, in the order the registration form lists them.
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    /// Parse a form value such as "A+" or "o-". Unrecognized input is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "A+" => Some(BloodType::APositive),
            "A-" => Some(BloodType::ANegative),
            "B+" => Some(BloodType::BPositive),
            "B-" => Some(BloodType::BNegative),
            "AB+" => Some(BloodType::AbPositive),
            "AB-" => Some(BloodType::AbNegative),
            "O+" => Some(BloodType::OPositive),
            "O-" => Some(BloodType::ONegative),
            _ => None,
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        };
        write!(f, "{}", label)
    }
}

/// A registered patient. Created once at registration and never mutated;
/// the registry owns every record exclusively.
///
/// Credentials are stored and displayed in plaintext. This is a demo identity
/// space shared by the patient and doctor portals, not an authentication
/// system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Generated patient identifier ("PT" + 9 uppercase alphanumerics)
    pub id: String,
    /// Generated plaintext password
    pub password: String,
    /// Full name, as entered
    pub name: String,
    /// Age, kept as the entered display string
    pub age: String,
    /// Gender; `None` when the draft was registered incomplete
    pub gender: Option<Gender>,
    /// Blood type; `None` when the draft was registered incomplete
    pub blood_type: Option<BloodType>,
    /// Free-text past medical conditions
    pub past_conditions: String,
    /// Free-text current medications
    pub current_medications: String,
    /// Free-text known allergies; copied verbatim into allergy findings
    pub known_allergies: String,
    /// Registration date display string
    pub registration_date: String,
}

impl Patient {
    /// Whether the patient registered any allergies.
    pub fn has_known_allergies(&self) -> bool {
        !self.known_allergies.trim().is_empty()
    }
}
