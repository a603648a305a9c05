//! Credential generation for new patient registrations.
//!
//! Identifiers and passwords are independent random alphanumeric strings,
//! uppercased. No uniqueness check is made against existing identifiers;
//! collision is astronomically unlikely at demo scale and is accepted as a
//! known gap rather than papered over.

use rand::distributions::Alphanumeric;
use rand::Rng;

const PATIENT_ID_PREFIX: &str = "PT";
const PATIENT_ID_RANDOM_LEN: usize = 9;
const PASSWORD_LEN: usize = 8;

/// Generate a patient identifier: "PT" followed by 9 uppercase alphanumerics.
pub fn generate_patient_id() -> String {
    format!(
        "{}{}",
        PATIENT_ID_PREFIX,
        random_upper_alphanumeric(PATIENT_ID_RANDOM_LEN)
    )
}

/// Generate an 8-character uppercase alphanumeric password.
pub fn generate_password() -> String {
    random_upper_alphanumeric(PASSWORD_LEN)
}

fn random_upper_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_id_shape() {
        let id = generate_patient_id();
        assert_eq!(id.len(), 11);
        assert!(id.starts_with("PT"));
        assert!(id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_password_shape() {
        let password = generate_password();
        assert_eq!(password.len(), 8);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_successive_ids_differ() {
        // Soft property: collisions are possible but improbable.
        let ids: Vec<String> = (0..64).map(|_| generate_patient_id()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
