#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod format;
pub mod output;
pub mod query;
pub mod runner;
pub mod search;
pub mod summary;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{ConfigError, RunnerConfig, DEFAULT_API_URL, DEFAULT_OUTPUT_DIR};
pub use format::{format_labels, DocumentRenderer, TemplateError};
pub use output::{get_filename, save_to_file, OutputError};
pub use query::SearchQuery;
pub use runner::{Runner, RunnerError};
pub use search::{
    extract_next_url, fetch_all, fetch_page, search_url, GitHubTransport, Label,
    PullRequestItem, RawResponse, SearchError, SearchPage, SearchResults, SearchTransport,
};
pub use summary::RunSummary;
