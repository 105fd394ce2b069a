//! Project card renderer.
//!
//! # Responsibility
//! - Map one [`ProjectRecord`] to a self-contained card fragment.
//! - Tag the Case Study trigger with the record id for the overlay wiring.

use crate::model::project::ProjectRecord;
use crate::render::{render_fragment, source_link, RenderOptions};
use askama::Template;

#[derive(Template)]
#[template(path = "project_card.html")]
struct ProjectCardTemplate<'a> {
    project: &'a ProjectRecord,
    secondary: bool,
    source_url: &'a str,
    source_label: &'static str,
}

/// Renders one project card.
///
/// `secondary` applies the de-emphasized styling class used by the "more
/// projects" group. Every optional field degrades by omission; this function
/// has no error conditions.
pub fn render_project_card(
    project: &ProjectRecord,
    secondary: bool,
    options: &RenderOptions,
) -> String {
    let source = source_link(project.github.as_deref(), options);
    let template = ProjectCardTemplate {
        project,
        secondary,
        source_url: source.url,
        source_label: source.label,
    };
    render_fragment(&template, "project_card")
}
