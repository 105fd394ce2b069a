//! Theme wiring: initial resolution, the toggle control and system-scheme
//! change notifications.
//!
//! Preference precedence lives in [`folio_core::theme`]; only an explicit
//! toggle persists a preference.

use crate::{dom, App};
use folio_core::theme::{self, Theme, THEME_STORAGE_KEY};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, MediaQueryListEvent};

const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub(crate) fn wire(app: &Rc<App>) -> Result<(), JsValue> {
    let document = app.document.clone();

    apply(&document, theme::preferred(saved().as_deref(), system_prefers_dark()?), false)?;

    if let Some(toggle) = document.query_selector(".theme-toggle")? {
        let toggle_document = document.clone();
        dom::on_event(
            &toggle,
            "click",
            Box::new(move |_event: Event| {
                let next = current_theme(&toggle_document).toggled();
                if let Err(err) = apply(&toggle_document, next, true) {
                    log::error!("event=theme_toggle_failed module=folio_web error={err:?}");
                }
            }),
        )?;
    }

    if let Some(media_query) = dom::window()?.match_media(COLOR_SCHEME_QUERY)? {
        let change_document = document.clone();
        dom::on_event(
            &media_query,
            "change",
            Box::new(move |event: Event| {
                let Ok(event) = event.dyn_into::<MediaQueryListEvent>() else {
                    return;
                };
                // A saved preference pins the theme; system changes pass through
                // only until the user toggles explicitly.
                if let Some(next) = theme::on_system_change(saved().as_deref(), event.matches()) {
                    let _ = apply(&change_document, next, false);
                }
            }),
        )?;
    }

    Ok(())
}

fn apply(document: &Document, theme: Theme, persist: bool) -> Result<(), JsValue> {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        classes.remove_2("light-theme", "dark-theme")?;
        classes.add_1(theme.class_name())?;
    }
    if persist {
        if let Some(storage) = dom::window()?.local_storage()? {
            storage.set_item(THEME_STORAGE_KEY, theme.as_str())?;
        }
    }
    Ok(())
}

fn current_theme(document: &Document) -> Theme {
    let dark = document
        .body()
        .map(|body| body.class_list().contains(Theme::Dark.class_name()))
        .unwrap_or(false);
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn saved() -> Option<String> {
    dom::window()
        .ok()?
        .local_storage()
        .ok()??
        .get_item(THEME_STORAGE_KEY)
        .ok()?
}

fn system_prefers_dark() -> Result<bool, JsValue> {
    Ok(dom::window()?
        .match_media(COLOR_SCHEME_QUERY)?
        .map(|media_query| media_query.matches())
        .unwrap_or(false))
}
