use anyhow::{Context, Result};
use std::env;

pub const ENV_USERNAME: &str = "WPFORMS_USERNAME";
pub const ENV_PASSWORD: &str = "WPFORMS_PASSWORD";
pub const ENV_FORM_IDS: &str = "WPFORMS_FORM_IDS";

/// Loads `.env` if present. Real environment variables win over file entries.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

pub fn username() -> Option<String> {
    env::var(ENV_USERNAME).ok()
}

pub fn password() -> Option<String> {
    env::var(ENV_PASSWORD).ok()
}

pub fn form_ids() -> Result<Option<Vec<u32>>> {
    match env::var(ENV_FORM_IDS) {
        Ok(raw) => parse_form_ids(&raw).map(Some),
        Err(_) => Ok(None),
    }
}

/// Parses a comma-separated form-id list, e.g. "1,3,4,5,7".
pub fn parse_form_ids(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("Invalid form id '{}'", s))
        })
        .collect()
}
