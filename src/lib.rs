use serde::{Deserialize, Serialize};

pub mod config;
pub mod fetch;
pub mod fields;
pub mod normalize;
pub mod sheet;
pub mod sync;

/// Service-interest value that marks a submission as a job seeker or vendor
/// rather than a prospective customer.
pub const SERVICE_JOB_SEEKER: &str = "Busco trabajo/ Ofrezco productos o servicios";

pub const PROGRESS_DISCARDED: &str = "Desestimado";
pub const PROGRESS_PENDING: &str = "Pendiente";
pub const STATUS_NOT_VIABLE: &str = "No viable";
pub const STATUS_AWAITING_DATA: &str = "A la espera de datos";

/// Normalized submission record, one per raw submission. Field order matches
/// the spreadsheet column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalRow {
    #[serde(rename = "Submission ID")]
    pub submission_id: Option<String>,
    #[serde(rename = "Form ID")]
    pub form_id: u32,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Creation Date")]
    pub creation_date: Option<String>,
    #[serde(rename = "Legal Name")]
    pub legal_name: Option<String>,
    #[serde(rename = "Contact Name")]
    pub contact_name: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
    #[serde(rename = "Service")]
    pub service: Option<String>,
    #[serde(rename = "Origin")]
    pub origin: String,
    #[serde(rename = "Sub-origin")]
    pub sub_origin: String,
    #[serde(rename = "Progress")]
    pub progress: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl CanonicalRow {
    /// Spreadsheet header row. Must stay in sync with the serde renames above.
    pub const HEADERS: [&'static str; 14] = [
        "Submission ID",
        "Form ID",
        "Company",
        "Creation Date",
        "Legal Name",
        "Contact Name",
        "Phone",
        "Email",
        "Message",
        "Service",
        "Origin",
        "Sub-origin",
        "Progress",
        "Status",
    ];
}
