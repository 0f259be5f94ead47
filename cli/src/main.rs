//! CLI for the merged pull request collector.
//!
//! Searches a repository for pull requests merged within a date range and
//! writes them to a Markdown document.

use clap::Parser;
use pr_collector::{
    ConfigError, RunSummary, Runner, RunnerConfig, RunnerError, SearchQuery, DEFAULT_API_URL,
    DEFAULT_OUTPUT_DIR,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fetch merged pull requests from a GitHub repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start date for PRs (YYYY-MM-DD).
    #[arg(long)]
    start_date: String,

    /// End date for PRs (YYYY-MM-DD).
    #[arg(long)]
    end_date: String,

    /// Repository in "owner/name" format.
    #[arg(long)]
    repository: String,

    /// Only include pull requests assigned to this user.
    #[arg(long)]
    username: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory the Markdown document is written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Values from .env must be visible before clap reads env-backed flags.
    let dotenv_error = reportable_dotenv_error(dotenvy::dotenv());

    init_tracing();

    if let Some(e) = dotenv_error {
        warn!(error = %e, "Failed to load .env file");
    }

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Keeps `.env` loading errors worth reporting. A missing file is not one.
fn reportable_dotenv_error(result: Result<PathBuf, dotenvy::Error>) -> Option<dotenvy::Error> {
    result.err().filter(|e| !e.not_found())
}

/// Builds the run configuration from parsed arguments.
fn build_config(args: Args) -> Result<RunnerConfig, ConfigError> {
    let query = SearchQuery::new(args.repository, args.start_date, args.end_date, args.username);
    Ok(RunnerConfig::new(query, args.token)?
        .with_api_url(&args.api_url)?
        .with_output_dir(args.output_dir))
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = build_config(args)?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("{}", summary.message());
}
