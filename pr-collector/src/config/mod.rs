//! Run configuration.
//!
//! Everything a run needs (credentials, API location, output location and the
//! query itself) is carried by an explicitly constructed [`RunnerConfig`].

mod error;

pub use error::ConfigError;

use crate::query::SearchQuery;
use std::path::{Path, PathBuf};
use url::Url;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default directory the Markdown document is written to.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Results requested per search page (the API maximum).
pub const RESULTS_PER_PAGE: u8 = 100;

/// Configuration for a single collection run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Search parameters.
    query: SearchQuery,
    /// GitHub token sent as `Authorization: token <TOKEN>`.
    token: String,
    /// Base URL of the GitHub REST API.
    api_url: Url,
    /// Directory that receives the output document.
    output_dir: PathBuf,
    /// Results per search page.
    per_page: u8,
}

impl RunnerConfig {
    /// Creates a configuration for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if `token` is absent or blank.
    pub fn new(query: SearchQuery, token: Option<String>) -> Result<Self, ConfigError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            query,
            token,
            api_url: parse_api_url(DEFAULT_API_URL)?,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            per_page: RESULTS_PER_PAGE,
        })
    }

    /// Sets a custom API base URL (e.g. a GitHub Enterprise host).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL cannot be parsed.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        self.api_url = parse_api_url(api_url)?;
        Ok(self)
    }

    /// Sets a custom output directory.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Returns the search parameters.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the number of results requested per page.
    pub fn per_page(&self) -> u8 {
        self.per_page
    }
}

fn parse_api_url(api_url: &str) -> Result<Url, ConfigError> {
    Url::parse(api_url).map_err(|source| ConfigError::InvalidApiUrl {
        url: api_url.to_string(),
        source,
    })
}
