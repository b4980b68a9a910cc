//! CLI Adapter.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

const LOG_ENV: &str = "RUN_DELETE_LOG";

#[derive(Parser)]
#[command(name = "run-delete")]
#[command(version)]
#[command(
    about = "Delete a GitHub Actions workflow run",
    long_about = "Delete a workflow run by ID. Without an ID, pick one of the repository's \
                  completed runs from an interactive list (requires a terminal)."
)]
struct Cli {
    /// ID of the workflow run to delete
    #[arg(value_name = "RUN_ID")]
    run_id: Option<String>,
    /// Select another repository using the OWNER/REPO format
    #[arg(short = 'R', long, value_name = "OWNER/REPO")]
    repo: Option<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<(), AppError> =
        crate::app::api::delete_run(cli.run_id, cli.repo.as_deref()).map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr and stay silent unless `RUN_DELETE_LOG` is set.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
