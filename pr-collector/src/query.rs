//! Search query construction.
//!
//! Builds the GitHub issue search query that selects merged pull requests
//! of one repository within a merge date range.

/// Sort order requested from the search API.
const SORT_ORDER: &str = "updated-desc";

/// Parameters of a merged pull request search.
///
/// Dates are forwarded to the search API verbatim; an inverted or malformed
/// range is not rejected here and simply yields no results remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    repository: String,
    start_date: String,
    end_date: String,
    assignee: Option<String>,
}

impl SearchQuery {
    /// Creates a query for `repository` ("owner/name") merged between the two dates.
    ///
    /// A blank assignee is treated the same as no assignee.
    pub fn new(
        repository: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        assignee: Option<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            assignee: assignee.filter(|name| !name.trim().is_empty()),
        }
    }

    /// Returns the repository in "owner/name" format.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the first merge date of the range.
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the last merge date of the range.
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Returns the assignee filter, if any.
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Renders the search query string.
    ///
    /// Format: `repo:{repository} is:pr is:merged merged:{start}..{end} sort:updated-desc`,
    /// followed by ` assignee:{assignee}` when an assignee is set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "repo:{} is:pr is:merged merged:{}..{} sort:{}",
            self.repository, self.start_date, self.end_date, SORT_ORDER
        );

        if let Some(assignee) = &self.assignee {
            query.push_str(" assignee:");
            query.push_str(assignee);
        }

        query
    }
}
