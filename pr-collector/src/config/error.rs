//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No access token was supplied.
    #[error("Missing GitHub access token: set GITHUB_TOKEN in the environment or a .env file")]
    MissingToken,

    /// The API base URL could not be parsed.
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
