use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://intralog.com.ar/wp-json/custom/v1/form-submissions/";

#[derive(Debug, Deserialize)]
struct SubmissionsResponse {
    #[serde(default)]
    form_submissions: Vec<Value>,
}

pub struct FormsClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl FormsClient {
    pub fn new(
        base_url: String,
        username: String,
        password: String,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            username,
            password,
        })
    }

    /// Fetches the submission list for one form. Non-200 and transport
    /// failures are errors; the caller decides whether the run continues.
    pub async fn fetch_submissions(&self, form_id: u32) -> Result<Vec<Value>> {
        let url = format!("{}{}", self.base_url, form_id);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .with_context(|| format!("Request failed for {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("HTTP {} from {}: {}", status, url, body.trim()));
        }

        let parsed: SubmissionsResponse = response
            .json()
            .await
            .with_context(|| format!("Invalid JSON body from {}", url))?;

        Ok(parsed.form_submissions)
    }
}
