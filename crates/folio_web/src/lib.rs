//! Browser boundary for the Folio portfolio site.
//!
//! # Responsibility
//! - Wire `folio_core` into the DOM: mount card fragments, run the one
//!   startup fetch, and translate UI events into controller calls.
//! - Keep all policy in `folio_core`; this crate only moves data between
//!   the core and the page.
//!
//! # Invariants
//! - Exported entry points never panic across the WASM boundary.
//! - Event listeners live for the whole page lifetime.

mod cards;
mod contact;
mod dom;
mod nav;
mod overlay;
mod theme;

use folio_core::{OverlayController, ProjectStore, RenderOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Shared page state handed to every event handler.
///
/// Explicit fields instead of ambient globals; exactly one `App` exists per
/// page and every closure holds an `Rc` to it.
pub(crate) struct App {
    pub(crate) document: Document,
    pub(crate) store: ProjectStore,
    pub(crate) options: RenderOptions,
    pub(crate) overlay: RefCell<OverlayController>,
}

/// Page entry point, invoked once when the WASM module loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = dom::document()?;
    let store = ProjectStore::embedded().map_err(|err| {
        log::error!("event=embedded_load_failed module=folio_web error={err}");
        JsValue::from_str(&err.to_string())
    })?;
    log::info!(
        "event=page_start module=folio_web status=ok version={} projects={}",
        folio_core::core_version(),
        store.len()
    );

    let app = Rc::new(App {
        document,
        store,
        options: RenderOptions::default(),
        overlay: RefCell::new(OverlayController::new()),
    });

    cards::mount_project_cards(&app)?;
    cards::load_prodigy_cards(&app);
    overlay::wire(&app)?;
    contact::wire(&app)?;
    theme::wire(&app)?;
    nav::wire(&app)?;

    Ok(())
}
