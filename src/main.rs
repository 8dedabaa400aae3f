use anyhow::Result;
use clap::{Parser, Subcommand};
use wpforms_sync::{fields, sync};

#[derive(Parser)]
#[command(name = "wpforms-sync")]
#[command(about = "Fetch WordPress form submissions, normalize fields, merge into a spreadsheet")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch submissions for all configured forms and merge them into the spreadsheet
    Sync(sync::SyncArgs),
    /// Print the field names observed on each configured form
    Fields(fields::FieldsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Sync(args) => sync::run(args),
        Commands::Fields(args) => fields::run(args),
    }
}
