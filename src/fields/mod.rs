use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::{error, warn};

use crate::config;
use crate::fetch::{FormsClient, DEFAULT_BASE_URL};

#[derive(Args)]
pub struct FieldsArgs {
    /// Submissions endpoint base URL (form id is appended)
    #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Basic-auth username (falls back to WPFORMS_USERNAME)
    #[arg(long)]
    pub username: Option<String>,

    /// Basic-auth password (falls back to WPFORMS_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,

    /// Comma-separated form ids (falls back to WPFORMS_FORM_IDS)
    #[arg(short, long, value_delimiter = ',')]
    pub form_ids: Option<Vec<u32>>,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,
}

/// Union of field names across submissions, in first-seen order.
pub fn field_names(submissions: &[Value]) -> Vec<String> {
    let mut names = Vec::new();
    for submission in submissions {
        if let Value::Object(map) = submission {
            for key in map.keys() {
                if !names.iter().any(|n| n == key) {
                    names.push(key.clone());
                }
            }
        }
    }
    names
}

pub fn run(args: FieldsArgs) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: FieldsArgs) -> Result<()> {
    config::load_env();

    let username = args
        .username
        .or_else(config::username)
        .context("No username: pass --username or set WPFORMS_USERNAME")?;
    let password = args
        .password
        .or_else(config::password)
        .context("No password: pass --password or set WPFORMS_PASSWORD")?;
    let form_ids = match args.form_ids {
        Some(ids) => ids,
        None => config::form_ids()?
            .context("No form ids: pass --form-ids or set WPFORMS_FORM_IDS")?,
    };

    let client = FormsClient::new(args.base_url, username, password, args.timeout)?;

    for form_id in form_ids {
        match client.fetch_submissions(form_id).await {
            Ok(submissions) => {
                let names = field_names(&submissions);
                if names.is_empty() {
                    warn!("No submissions for form {}", form_id);
                    continue;
                }
                println!("Field names for form {}:", form_id);
                for name in names {
                    println!("  {}", name);
                }
            }
            Err(e) => error!("Failed to fetch form {}: {:#}", form_id, e),
        }
    }

    Ok(())
}
