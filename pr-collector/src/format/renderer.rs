//! Pull request renderer.

use super::{format_labels, TemplateError, NULL_FIELD};
use crate::search::PullRequestItem;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Markdown fragment for a single pull request.
const PULL_REQUEST_TEMPLATE: &str = "## PR #{{number}} - {{title}}\n\n\
{{body}}\n\n\
Merged At: {{closed_at}}\n\n\
{{labels}}\n\n";

/// Creates a Handlebars registry for Markdown output.
///
/// The registry is configured with:
/// - No HTML escaping (titles and bodies are written verbatim)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders pull requests into the output document.
pub struct DocumentRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders one pull request as a Markdown fragment.
    ///
    /// Field order is fixed: heading with number and title, body, merge
    /// timestamp, labels line. A `null` body or timestamp is written as
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_pull_request(&self, item: &PullRequestItem) -> Result<String, TemplateError> {
        let data = json!({
            "number": item.number,
            "title": item.title,
            "body": item.body.as_deref().unwrap_or(NULL_FIELD),
            "closed_at": item.closed_at.as_deref().unwrap_or(NULL_FIELD),
            "labels": format_labels(&item.labels),
        });

        self.render_template(PULL_REQUEST_TEMPLATE, &data)
    }

    /// Renders all pull requests, concatenated in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if any fragment fails to render.
    pub fn render_document(&self, items: &[PullRequestItem]) -> Result<String, TemplateError> {
        let mut document = String::new();
        for item in items {
            document.push_str(&self.render_pull_request(item)?);
        }
        Ok(document)
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
