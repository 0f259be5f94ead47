//! Run summary.

use std::path::PathBuf;

/// Outcome of a complete collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of search pages requested.
    pub pages_fetched: usize,

    /// Number of pull requests collected across all pages.
    pub pull_requests: usize,

    /// Whether pagination ended on a failed page request.
    ///
    /// The output document does not record this.
    pub truncated: bool,

    /// Path of the written document; `None` when nothing was found.
    pub output_path: Option<PathBuf>,
}

impl RunSummary {
    /// Returns true if the run found no pull requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pull_requests == 0
    }

    /// Returns the message reported to the user at the end of a run.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.output_path {
            Some(path) => format!("Saved to {}", path.display()),
            None => "No pull requests found.".to_string(),
        }
    }
}
