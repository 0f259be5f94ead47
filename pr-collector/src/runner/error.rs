//! Runner error types.

/// Errors that abort a collection run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid or incomplete configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Search request or response errors.
    #[error(transparent)]
    Search(#[from] crate::search::SearchError),

    /// Markdown rendering errors.
    #[error(transparent)]
    Template(#[from] crate::format::TemplateError),

    /// Output file errors.
    #[error(transparent)]
    Output(#[from] crate::output::OutputError),
}
