//! Card grid mounting: the synchronous embedded grids and the one
//! asynchronous Prodigy fetch.

use crate::{dom, App};
use folio_core::{
    render_prodigy_card, render_project_card, FetchError, FetchResult, ProdigyRecord,
    ProdigyStore, PRODIGY_DATA_URL, PRODIGY_ERROR_FRAGMENT,
};
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

/// Mounts the featured and additional project grids from the embedded store.
///
/// The "more projects" section is hidden entirely when no record carries the
/// `additional` tag.
pub(crate) fn mount_project_cards(app: &Rc<App>) -> Result<(), JsValue> {
    let featured = dom::element_by_id(&app.document, "projects-container")?;
    for project in app.store.featured() {
        featured.insert_adjacent_html(
            "beforeend",
            &render_project_card(project, false, &app.options),
        )?;
    }

    if app.store.has_additional() {
        let more = dom::element_by_id(&app.document, "more-projects-container")?;
        for project in app.store.additional() {
            more.insert_adjacent_html(
                "beforeend",
                &render_project_card(project, true, &app.options),
            )?;
        }
    } else if let Some(section) = app.document.get_element_by_id("more-projects") {
        if let Some(section) = section.dyn_ref::<HtmlElement>() {
            section.style().set_property("display", "none")?;
        }
    }

    Ok(())
}

/// Starts the single startup fetch for the Prodigy grid.
///
/// On failure the store stays empty, one diagnostic is logged and the card
/// region shows the static error fragment. Never retried; a page reload is
/// the only recovery path.
pub(crate) fn load_prodigy_cards(app: &Rc<App>) {
    let app = Rc::clone(app);
    spawn_local(async move {
        let container = match dom::element_by_id(&app.document, "prodigy-container") {
            Ok(container) => container,
            Err(err) => {
                log::error!("event=prodigy_mount_failed module=folio_web error={err:?}");
                return;
            }
        };

        match fetch_prodigy().await {
            Ok(store) => {
                for record in store.records() {
                    if let Err(err) =
                        container.insert_adjacent_html("beforeend", &render_prodigy_card(record))
                    {
                        log::error!("event=prodigy_mount_failed module=folio_web error={err:?}");
                    }
                }
            }
            Err(err) => {
                log::error!("event=prodigy_fetch_failed module=folio_web error={err}");
                container.set_inner_html(PRODIGY_ERROR_FRAGMENT);
            }
        }
    });
}

async fn fetch_prodigy() -> FetchResult {
    let response = Request::get(PRODIGY_DATA_URL)
        .send()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Request(format!(
            "unexpected status {}",
            response.status()
        )));
    }
    let records: Vec<ProdigyRecord> = response
        .json()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(ProdigyStore::from_records(records)?)
}
