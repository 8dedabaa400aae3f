use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::fetch::{FormsClient, DEFAULT_BASE_URL};
use crate::{config, normalize, sheet};

#[derive(Args)]
pub struct SyncArgs {
    /// Output spreadsheet path
    #[arg(short, long, default_value = "form_submissions.csv")]
    pub output: PathBuf,

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

pub fn run(args: SyncArgs) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: SyncArgs) -> Result<()> {
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

    // One form at a time; a failed fetch skips that form, never the run.
    let mut rows = Vec::new();
    for form_id in form_ids {
        match client.fetch_submissions(form_id).await {
            Ok(submissions) => {
                if submissions.is_empty() {
                    warn!("No submissions for form {}", form_id);
                    continue;
                }
                info!("Form {}: {} submissions", form_id, submissions.len());
                rows.extend(
                    submissions
                        .iter()
                        .map(|s| normalize::normalize(s, form_id)),
                );
            }
            Err(e) => error!("Failed to fetch form {}: {:#}", form_id, e),
        }
    }

    if let Err(e) = sheet::merge_into_file(&args.output, rows) {
        error!("Failed to update {}: {:#}", args.output.display(), e);
    }

    Ok(())
}
