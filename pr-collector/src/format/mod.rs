//! Markdown rendering of collected pull requests.
//!
//! Each pull request becomes one fragment; the output document is the
//! concatenation of fragments in the order the API returned them.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, DocumentRenderer};

use crate::search::Label;

/// Text used when a pull request carries no labels.
pub const NO_LABELS: &str = "No labels";

/// Text rendered for a field GitHub returned as `null`.
pub const NULL_FIELD: &str = "None";

/// Renders the labels line of a fragment.
///
/// Format: "Labels: {name}, {name}" in the given order, or "No labels".
#[must_use]
pub fn format_labels(labels: &[Label]) -> String {
    if labels.is_empty() {
        return NO_LABELS.to_string();
    }

    let names: Vec<&str> = labels.iter().map(|label| label.name.as_str()).collect();
    format!("Labels: {}", names.join(", "))
}
