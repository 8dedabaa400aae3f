use serde_json::Value;

use crate::{
    CanonicalRow, PROGRESS_DISCARDED, PROGRESS_PENDING, SERVICE_JOB_SEEKER, STATUS_AWAITING_DATA,
    STATUS_NOT_VIABLE,
};

mod scheme;
pub use scheme::{company_for, scheme_for, FieldScheme, INTRALOG_FORM_IDS};

pub const ORIGIN_WEB: &str = "Sitio web";

/// Submissions from form 7 are triaged manually and never auto-discarded.
const MANUAL_TRIAGE_FORM_ID: u32 = 7;

/// Field value as a plain string. Numbers and booleans are stringified,
/// null and empty strings collapse to None so that rows compare stably
/// after a spreadsheet round trip.
fn field_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// First present, non-empty key wins.
fn pick(submission: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| submission.get(*key).and_then(field_string))
}

fn triage(service: Option<&str>, form_id: u32) -> (&'static str, &'static str) {
    if service == Some(SERVICE_JOB_SEEKER) && form_id != MANUAL_TRIAGE_FORM_ID {
        (PROGRESS_DISCARDED, STATUS_NOT_VIABLE)
    } else {
        (PROGRESS_PENDING, STATUS_AWAITING_DATA)
    }
}

/// Maps one raw submission onto the canonical schema. Missing source fields
/// become None; this never fails.
pub fn normalize(submission: &Value, form_id: u32) -> CanonicalRow {
    let scheme = scheme_for(form_id);

    let service = pick(submission, scheme.service);
    let (progress, status) = triage(service.as_deref(), form_id);

    CanonicalRow {
        submission_id: submission.get("id").and_then(field_string),
        form_id,
        company: company_for(form_id).to_string(),
        creation_date: submission.get("created_at").and_then(field_string),
        legal_name: pick(submission, scheme.legal_name),
        contact_name: pick(submission, scheme.contact_name),
        phone: pick(submission, scheme.phone),
        email: pick(submission, scheme.email),
        message: pick(submission, scheme.message),
        service,
        origin: ORIGIN_WEB.to_string(),
        sub_origin: format!("Formulario {}", form_id),
        progress: progress.to_string(),
        status: status.to_string(),
    }
}
