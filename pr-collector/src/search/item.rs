//! Search result item types.

use serde::Deserialize;

/// A pull request as returned in the `items` array of an issue search.
///
/// Only the fields rendered into the output document are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestItem {
    /// Pull request number.
    pub number: u64,

    /// Pull request title.
    pub title: String,

    /// Description text; `null` when the author left it empty.
    #[serde(default)]
    pub body: Option<String>,

    /// Timestamp the pull request was closed by its merge.
    #[serde(default)]
    pub closed_at: Option<String>,

    /// Labels in the order GitHub returns them.
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// A label attached to a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
}

/// Body of a successful search response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) items: Vec<PullRequestItem>,
}
