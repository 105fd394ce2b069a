//! Core domain logic for the Folio portfolio site.
//! This crate is the single source of truth for rendering and UI invariants;
//! the browser boundary and the CLI probe stay thin on top of it.

pub mod form;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod nav;
pub mod overlay;
pub mod render;
pub mod store;
pub mod theme;

#[cfg(not(target_arch = "wasm32"))]
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::prodigy::ProdigyRecord;
pub use model::project::{CaseStudy, ProjectId, ProjectRecord, ProjectValidationError};
pub use overlay::{next_focus_index, OverlayController, OverlayState};
pub use render::card::render_project_card;
pub use render::case_study::{assemble_case_study, CaseStudyView};
pub use render::prodigy::render_prodigy_card;
pub use render::{RenderOptions, DEFAULT_GITHUB_URL, PRODIGY_ERROR_FRAGMENT};
pub use store::prodigy_store::{FetchError, FetchResult, ProdigyStore, PRODIGY_DATA_URL};
pub use store::project_store::ProjectStore;
pub use store::{StoreError, StoreResult};
pub use theme::{Theme, THEME_STORAGE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
