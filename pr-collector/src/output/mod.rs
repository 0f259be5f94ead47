//! Output document naming and persistence.

mod error;

pub use error::OutputError;

use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds the path of the output document.
///
/// Format: `{output_dir}/PRs_{repo}_{start}_{end}[_{username}].md`, where
/// `{repo}` is the repository name without its owner prefix.
#[must_use]
pub fn get_filename(
    output_dir: &Path,
    repository: &str,
    start_date: &str,
    end_date: &str,
    username: Option<&str>,
) -> PathBuf {
    let repo_name = repository
        .rsplit_once('/')
        .map_or(repository, |(_, name)| name);

    let file_name = match username {
        Some(username) => format!("PRs_{repo_name}_{start_date}_{end_date}_{username}.md"),
        None => format!("PRs_{repo_name}_{start_date}_{end_date}.md"),
    };

    output_dir.join(file_name)
}

/// Writes `content` to `path`, replacing any existing file.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`OutputError`] if the directory or file cannot be written.
pub fn save_to_file(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::CreateDir {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    debug!(path = %path.display(), bytes = content.len(), "Writing output document");
    std::fs::write(path, content).map_err(|e| OutputError::Write {
        path: path.display().to_string(),
        source: e,
    })
}
