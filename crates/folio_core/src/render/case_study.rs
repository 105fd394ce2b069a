//! Case-study assembler for the overlay detail view.
//!
//! # Responsibility
//! - Map one record's case-study fields into the fixed-order detail fragment.
//! - Treat an unknown id, or a record without a case study, as a quiet miss.
//!
//! # Invariants
//! - Section order is fixed: subtitle, Problem, Solution, Key Features,
//!   Security Implementation (optional), What I Learned (optional), tech
//!   tags, links row.
//! - A miss produces no output; current overlay content is never touched.

use crate::model::project::{CaseStudy, ProjectRecord};
use crate::render::{render_fragment, source_link, RenderOptions};
use crate::store::project_store::ProjectStore;
use askama::Template;

#[derive(Template)]
#[template(path = "case_study.html")]
struct CaseStudyTemplate<'a> {
    project: &'a ProjectRecord,
    case_study: &'a CaseStudy,
    source_url: &'a str,
    source_label: &'static str,
}

/// Assembled detail view for the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyView {
    /// Overlay heading, `{title} - Case Study`.
    pub title: String,
    /// Detail fragment written into the overlay body.
    pub body: String,
}

/// Assembles the detail view for the record with the given id.
///
/// Returns `None` when no record matches or the record has no case study;
/// the caller must leave the currently displayed content unchanged.
pub fn assemble_case_study(
    store: &ProjectStore,
    id: &str,
    options: &RenderOptions,
) -> Option<CaseStudyView> {
    let project = store.get(id)?;
    let case_study = project.case_study.as_ref()?;
    let source = source_link(project.github.as_deref(), options);
    let template = CaseStudyTemplate {
        project,
        case_study,
        source_url: source.url,
        source_label: source.label,
    };
    Some(CaseStudyView {
        title: format!("{} - Case Study", project.title),
        body: render_fragment(&template, "case_study"),
    })
}
