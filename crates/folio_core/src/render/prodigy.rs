//! Prodigy card renderer.
//!
//! # Responsibility
//! - Map one [`ProdigyRecord`] to a card fragment with highlights and the
//!   decorative demo checklist.
//! - Wrap the whole card in a single accessible link when `live` is present.

use crate::model::prodigy::ProdigyRecord;
use crate::render::render_fragment;
use askama::Template;

#[derive(Template)]
#[template(path = "prodigy_card.html")]
struct ProdigyCardTemplate<'a> {
    project: &'a ProdigyRecord,
}

/// Renders one Prodigy card.
///
/// With `live` present the card body is wrapped in one clickable link
/// labeled for screen readers; otherwise it renders as a static container.
/// `github` and `video` buttons are appended in that order, each only when
/// its field is present.
pub fn render_prodigy_card(project: &ProdigyRecord) -> String {
    render_fragment(&ProdigyCardTemplate { project }, "prodigy_card")
}
