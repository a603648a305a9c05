//! Line-input dispatch: maps one line of user input to handler calls for the
//! current screen, mirroring the commands each view advertises.
//!
//! Unknown input is ignored silently, the same way a disabled button ignores
//! clicks. The only surfaced failure is an invalid login.

use smart_ehr_core::{handlers, AppState, BloodType, Gender, Screen};

/// Result of dispatching one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// State may have changed; re-render and continue.
    Continue,
    /// Show a blocking alert, state unchanged.
    Alert(String),
    /// Leave the event loop.
    Quit,
}

/// Dispatch one trimmed input line against the current screen.
pub fn dispatch(state: &mut AppState, line: &str) -> Outcome {
    match state.screen {
        Screen::Home => home(state, line),
        Screen::PatientLogin => patient_login(state, line),
        Screen::PatientRegistration => registration(state, line),
        Screen::PatientDashboard => patient_dashboard(state, line),
        Screen::DoctorLogin => doctor_login(state, line),
        Screen::DoctorDashboard => doctor_dashboard(state, line),
    }
}

fn home(state: &mut AppState, line: &str) -> Outcome {
    match line {
        "1" => handlers::navigate(state, Screen::PatientRegistration),
        "2" => handlers::navigate(state, Screen::PatientLogin),
        "3" => handlers::navigate(state, Screen::DoctorLogin),
        "q" => return Outcome::Quit,
        _ => {}
    }
    Outcome::Continue
}

fn patient_login(state: &mut AppState, line: &str) -> Outcome {
    match split_command(line) {
        ("id", Some(value)) => state.login.patient_id = value.to_string(),
        ("pass", Some(value)) => state.login.password = value.to_string(),
        ("login", None) if state.login.is_filled() => {
            if let Err(e) = handlers::patient_login(state) {
                return Outcome::Alert(e.to_string());
            }
        }
        ("register", None) => handlers::navigate(state, Screen::PatientRegistration),
        ("back", None) => handlers::navigate(state, Screen::Home),
        _ => {}
    }
    Outcome::Continue
}

fn registration(state: &mut AppState, line: &str) -> Outcome {
    match split_command(line) {
        ("name", Some(value)) => state.registration.name = value.to_string(),
        ("age", Some(value)) => state.registration.age = value.to_string(),
        // The form only offers valid options; unparsable values are ignored.
        ("gender", Some(value)) => {
            if let Some(gender) = Gender::parse(value) {
                state.registration.gender = Some(gender);
            }
        }
        ("blood", Some(value)) => {
            if let Some(blood_type) = BloodType::parse(value) {
                state.registration.blood_type = Some(blood_type);
            }
        }
        ("conditions", Some(value)) => state.registration.past_conditions = value.to_string(),
        ("medications", Some(value)) => {
            state.registration.current_medications = value.to_string()
        }
        ("allergies", Some(value)) => state.registration.known_allergies = value.to_string(),
        ("submit", None) if state.registration.is_complete() => handlers::register(state),
        ("login", None) => handlers::navigate(state, Screen::PatientLogin),
        ("back", None) => handlers::navigate(state, Screen::Home),
        _ => {}
    }
    Outcome::Continue
}

fn patient_dashboard(state: &mut AppState, line: &str) -> Outcome {
    let stamp = date_stamp();
    match line {
        "1" => handlers::upload_document(state, &format!("Blood Test Report - {}", stamp)),
        "2" => handlers::upload_document(state, &format!("X-Ray Report - {}", stamp)),
        "3" => handlers::upload_document(state, &format!("Prescription - {}", stamp)),
        "4" => handlers::upload_document(state, &format!("ECG Report - {}", stamp)),
        "logout" => handlers::logout(state),
        _ => {}
    }
    Outcome::Continue
}

fn doctor_login(state: &mut AppState, line: &str) -> Outcome {
    match split_command(line) {
        ("id", Some(value)) => state.login.patient_id = value.to_string(),
        ("pass", Some(value)) => state.login.password = value.to_string(),
        ("login", None) if state.login.is_filled() => {
            if let Err(e) = handlers::doctor_login(state) {
                return Outcome::Alert(e.to_string());
            }
        }
        ("back", None) => handlers::navigate(state, Screen::Home),
        _ => {}
    }
    Outcome::Continue
}

fn doctor_dashboard(state: &mut AppState, line: &str) -> Outcome {
    let stamp = date_stamp();
    match line {
        "1" => handlers::doctor_upload(state, &format!("New Prescription - Dr. Smith - {}", stamp)),
        "2" => handlers::doctor_upload(state, &format!("Lab Results - {}", stamp)),
        "logout" => handlers::doctor_logout(state),
        _ => {}
    }
    Outcome::Continue
}

/// Split "command rest of line" into the command word and its argument.
fn split_command(line: &str) -> (&str, Option<&str>) {
    match line.split_once(' ') {
        Some((command, rest)) => (command, Some(rest.trim())),
        None => (line, None),
    }
}

fn date_stamp() -> String {
    chrono::Local::now().format("%m/%d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_via_input(state: &mut AppState) -> String {
        dispatch(state, "1");
        dispatch(state, "name Jane Doe");
        dispatch(state, "age 30");
        dispatch(state, "gender Female");
        dispatch(state, "blood O+");
        dispatch(state, "allergies Penicillin");
        dispatch(state, "submit");
        state.current_patient().unwrap().id.clone()
    }

    #[test]
    fn test_registration_flow_via_input() {
        let mut state = AppState::new();
        let id = register_via_input(&mut state);

        assert_eq!(state.screen, Screen::PatientDashboard);
        let patient = state.patient(&id).unwrap();
        assert_eq!(patient.name, "Jane Doe");
        assert_eq!(patient.gender, Some(Gender::Female));
        assert_eq!(patient.blood_type, Some(BloodType::OPositive));
    }

    #[test]
    fn test_submit_ignored_while_draft_incomplete() {
        let mut state = AppState::new();
        dispatch(&mut state, "1");
        dispatch(&mut state, "name Jane Doe");
        dispatch(&mut state, "submit");

        assert_eq!(state.screen, Screen::PatientRegistration);
        assert_eq!(state.patient_count(), 0);
    }

    #[test]
    fn test_invalid_gender_value_ignored() {
        let mut state = AppState::new();
        dispatch(&mut state, "1");
        dispatch(&mut state, "gender Robot");
        assert!(state.registration.gender.is_none());
    }

    #[test]
    fn test_failed_login_alerts_and_stays() {
        let mut state = AppState::new();
        dispatch(&mut state, "2");
        dispatch(&mut state, "id PTUNKNOWN01");
        dispatch(&mut state, "pass WRONG");

        match dispatch(&mut state, "login") {
            Outcome::Alert(message) => assert!(message.contains("Invalid Patient ID")),
            other => panic!("expected alert, got {:?}", other),
        }
        assert_eq!(state.screen, Screen::PatientLogin);
    }

    #[test]
    fn test_login_ignored_until_both_fields_filled() {
        let mut state = AppState::new();
        dispatch(&mut state, "2");
        dispatch(&mut state, "id PTSOMETHING");
        assert_eq!(dispatch(&mut state, "login"), Outcome::Continue);
        assert_eq!(state.screen, Screen::PatientLogin);
    }

    #[test]
    fn test_dashboard_uploads_and_logout() {
        let mut state = AppState::new();
        let id = register_via_input(&mut state);

        dispatch(&mut state, "1");
        dispatch(&mut state, "4");
        assert_eq!(state.documents_for(&id).len(), 2);
        assert!(state.documents_for(&id)[0]
            .file_name
            .starts_with("Blood Test Report - "));

        dispatch(&mut state, "logout");
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn test_quit_only_from_home() {
        let mut state = AppState::new();
        assert_eq!(dispatch(&mut state, "q"), Outcome::Quit);

        dispatch(&mut state, "2");
        assert_eq!(dispatch(&mut state, "q"), Outcome::Continue);
    }
}
