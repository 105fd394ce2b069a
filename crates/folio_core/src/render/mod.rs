//! Fragment renderers: data records in, HTML fragments out.
//!
//! # Responsibility
//! - Project records into self-contained markup fragments via compile-time
//!   askama templates (auto-escaped).
//! - Centralize the source-link fallback rule shared by all renderers.
//!
//! # Invariants
//! - Renderers never fail on a missing optional field; the corresponding
//!   element is omitted from the fragment.
//! - Fragment insertion is the caller's concern; no renderer touches the DOM.

pub mod card;
pub mod case_study;
pub mod prodigy;

use askama::Template;

/// Profile URL used when a record carries no `github` link of its own.
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/Mina-Adel-dev";

/// Static fragment substituted for the Prodigy card list on fetch failure.
pub const PRODIGY_ERROR_FRAGMENT: &str =
    r#"<p class="error-message">Unable to load Prodigy projects. Please check your connection.</p>"#;

/// Renderer configuration shared by every fragment builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Source-code link used when a record has no `github` field.
    pub fallback_github_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fallback_github_url: DEFAULT_GITHUB_URL.to_string(),
        }
    }
}

/// Resolved source-code link for one record.
///
/// Absent `github` falls back to the profile URL with the profile label.
pub(crate) struct SourceLink<'a> {
    pub url: &'a str,
    pub label: &'static str,
}

pub(crate) fn source_link<'a>(
    github: Option<&'a str>,
    options: &'a RenderOptions,
) -> SourceLink<'a> {
    match github {
        Some(url) => SourceLink {
            url,
            label: "GitHub",
        },
        None => SourceLink {
            url: &options.fallback_github_url,
            label: "GitHub Profile",
        },
    }
}

/// Renders a template, downgrading the (practically unreachable) formatting
/// failure to an empty fragment plus one diagnostic.
pub(crate) fn render_fragment<T: Template>(template: &T, what: &str) -> String {
    match template.render() {
        Ok(html) => html,
        Err(err) => {
            log::error!("event=render_failed fragment={what} error={err}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{source_link, RenderOptions, DEFAULT_GITHUB_URL};

    #[test]
    fn source_link_prefers_record_url() {
        let options = RenderOptions::default();
        let link = source_link(Some("https://github.com/example/repo"), &options);
        assert_eq!(link.url, "https://github.com/example/repo");
        assert_eq!(link.label, "GitHub");
    }

    #[test]
    fn source_link_falls_back_to_profile() {
        let options = RenderOptions::default();
        let link = source_link(None, &options);
        assert_eq!(link.url, DEFAULT_GITHUB_URL);
        assert_eq!(link.label, "GitHub Profile");
    }
}
