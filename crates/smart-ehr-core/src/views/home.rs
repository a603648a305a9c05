//! Home screen: landing page with portal selection.

use super::HEAVY_RULE;
use crate::state::AppState;

pub(super) fn view(_state: &AppState) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", HEAVY_RULE));
    out.push_str("  SMART EHR SUMMARIZER\n");
    out.push_str("  AI-Powered Electronic Health Records Management\n");
    out.push_str(&format!("{}\n\n", HEAVY_RULE));

    out.push_str("  PATIENT PORTAL\n");
    out.push_str("  Register and manage your health records securely\n");
    out.push_str("    - Secure registration with unique ID\n");
    out.push_str("    - Upload prescriptions & reports\n");
    out.push_str("    - AI-powered risk detection\n\n");

    out.push_str("  DOCTOR PORTAL\n");
    out.push_str("  Access patient records and provide care\n");
    out.push_str("    - Secure patient access with credentials\n");
    out.push_str("    - View AI-summarized reports\n");
    out.push_str("    - Check allergies & medications\n\n");

    out.push_str("  [1] New Patient Registration\n");
    out.push_str("  [2] Existing Patient Login\n");
    out.push_str("  [3] Doctor Portal\n");
    out.push_str("  [q] Quit\n");

    out
}
