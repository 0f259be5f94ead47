//! Search error types.

use thiserror::Error;

/// Errors that abort a search.
///
/// A non-200 response from the search API is not one of these; it is logged
/// and treated as an empty final page.
#[derive(Debug, Error)]
pub enum SearchError {
    /// GitHub API transport error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// A search or next-page URL could not be parsed.
    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A successful response did not contain valid search JSON.
    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}
