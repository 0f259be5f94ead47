//! Orchestrates a collection run.

mod error;

pub use error::RunnerError;

use crate::config::RunnerConfig;
use crate::format::DocumentRenderer;
use crate::output::{get_filename, save_to_file};
use crate::search::{fetch_all, search_url, GitHubTransport, SearchTransport};
use crate::summary::RunSummary;
use tracing::{info, info_span, warn, Instrument};

/// Runs the search, renders the results and writes the output document.
pub struct Runner<T = GitHubTransport> {
    config: RunnerConfig,
    transport: T,
    renderer: DocumentRenderer,
}

impl Runner<GitHubTransport> {
    /// Builds a runner that talks to the configured GitHub API.
    ///
    /// # Errors
    ///
    /// Returns an error if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let transport = GitHubTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: SearchTransport> Runner<T> {
    /// Builds a runner that issues requests through `transport`.
    pub fn with_transport(config: RunnerConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            renderer: DocumentRenderer::new(),
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Returns the transport requests are issued through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Executes the full collection flow.
    ///
    /// The output document is written once, after the last page. When no
    /// pull requests are found nothing is written, so an earlier document
    /// for the same parameters is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if a request cannot be performed, a response
    /// cannot be decoded, or the document cannot be rendered or written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let query = self.config.query();
        let span = info_span!(
            "collect",
            repository = %query.repository(),
            start_date = %query.start_date(),
            end_date = %query.end_date(),
            assignee = query.assignee().unwrap_or("")
        );

        self.collect().instrument(span).await
    }

    async fn collect(&self) -> Result<RunSummary, RunnerError> {
        let query = self.config.query();
        let url = search_url(self.config.api_url(), query, self.config.per_page())?;
        info!(query = %query.to_query_string(), "Searching merged pull requests");

        let results = fetch_all(&self.transport, url).await?;
        let mut summary = RunSummary {
            pages_fetched: results.pages,
            pull_requests: results.items.len(),
            truncated: results.truncated,
            output_path: None,
        };

        if results.truncated {
            warn!(
                collected = summary.pull_requests,
                "A page request failed; results may be incomplete"
            );
        }

        if results.items.is_empty() {
            info!(pages = summary.pages_fetched, "No pull requests found");
            return Ok(summary);
        }

        let document = self.renderer.render_document(&results.items)?;
        let path = get_filename(
            self.config.output_dir(),
            query.repository(),
            query.start_date(),
            query.end_date(),
            query.assignee(),
        );
        save_to_file(&path, &document)?;

        info!(
            path = %path.display(),
            count = summary.pull_requests,
            pages = summary.pages_fetched,
            "Saved pull requests"
        );
        summary.output_path = Some(path);
        Ok(summary)
    }
}
