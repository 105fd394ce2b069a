//! Overlay (modal) wiring: trigger clicks, close paths and the focus trap.
//!
//! All open/close decisions live in [`folio_core::OverlayController`]; this
//! module applies its instructions to the page.

use crate::{dom, App};
use folio_core::next_focus_index;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

/// Delay before moving focus to the overlay title, letting the open
/// transition finish first.
const FOCUS_DELAY_MS: i32 = 100;

/// Selector for keyboard-focusable elements inside the overlay body.
const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

pub(crate) fn wire(app: &Rc<App>) -> Result<(), JsValue> {
    let click_app = Rc::clone(app);
    dom::on_event(
        &app.document,
        "click",
        Box::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Ok(Some(trigger)) = target.closest(".case-study-btn") {
                if let Some(id) = trigger.get_attribute("data-project") {
                    open_overlay(&click_app, &id);
                }
                return;
            }
            let closes = target.class_list().contains("modal-overlay")
                || target.closest(".modal-close").ok().flatten().is_some();
            if closes {
                close_overlay(&click_app);
            }
        }),
    )?;

    let key_app = Rc::clone(app);
    dom::on_event(
        &app.document,
        "keydown",
        Box::new(move |event: Event| {
            let Ok(event) = event.dyn_into::<KeyboardEvent>() else {
                return;
            };
            if !key_app.overlay.borrow().is_open() {
                return;
            }
            match event.key().as_str() {
                "Escape" => close_overlay(&key_app),
                "Tab" => trap_focus(&key_app, &event),
                _ => {}
            }
        }),
    )?;

    Ok(())
}

fn open_overlay(app: &Rc<App>, id: &str) {
    // Lookup miss: state stays as-is and the display region is untouched.
    let view = {
        let mut overlay = app.overlay.borrow_mut();
        overlay.open(&app.store, id, &app.options)
    };
    let Some(view) = view else {
        log::debug!("event=overlay_lookup_miss module=folio_web id={id}");
        return;
    };

    let applied = (|| -> Result<(), JsValue> {
        let title = dom::html_element_by_id(&app.document, "modal-title")?;
        title.set_text_content(Some(&view.title));
        dom::element_by_id(&app.document, "modal-body")?.set_inner_html(&view.body);
        dom::element_by_id(&app.document, "project-modal")?
            .class_list()
            .add_1("active")?;
        if let Some(body) = app.document.body() {
            body.style().set_property("overflow", "hidden")?;
        }
        schedule_title_focus(&title)
    })();
    if let Err(err) = applied {
        log::error!("event=overlay_open_failed module=folio_web error={err:?}");
    }
}

fn close_overlay(app: &Rc<App>) {
    // No-op while already Closed.
    let Some(trigger_id) = app.overlay.borrow_mut().close() else {
        return;
    };

    let applied = (|| -> Result<(), JsValue> {
        dom::element_by_id(&app.document, "project-modal")?
            .class_list()
            .remove_1("active")?;
        if let Some(body) = app.document.body() {
            body.style().set_property("overflow", "")?;
        }
        // Keyboard focus goes back to the control that opened the overlay.
        let selector = format!(".case-study-btn[data-project=\"{trigger_id}\"]");
        if let Ok(Some(button)) = app.document.query_selector(&selector) {
            if let Some(button) = button.dyn_ref::<HtmlElement>() {
                let _ = button.focus();
            }
        }
        Ok(())
    })();
    if let Err(err) = applied {
        log::error!("event=overlay_close_failed module=folio_web error={err:?}");
    }
}

/// Keeps Tab cycling inside the overlay, wrapping at both ends.
///
/// Interior moves stay native; only the edge presses are intercepted.
fn trap_focus(app: &Rc<App>, event: &KeyboardEvent) {
    let trapped = (|| -> Result<(), JsValue> {
        let body = dom::element_by_id(&app.document, "modal-body")?;
        let nodes = body.query_selector_all(FOCUSABLE_SELECTOR)?;
        let count = nodes.length() as usize;
        let active = app.document.active_element();

        let mut current = None;
        for index in 0..count {
            let element = nodes
                .item(index as u32)
                .and_then(|node| node.dyn_into::<Element>().ok());
            if let (Some(active), Some(element)) = (active.as_ref(), element.as_ref()) {
                if active == element {
                    current = Some(index);
                    break;
                }
            }
        }

        let Some(current) = current else {
            return Ok(());
        };
        let backward = event.shift_key();
        let at_edge = if backward {
            current == 0
        } else {
            current + 1 == count
        };
        if !at_edge {
            return Ok(());
        }

        if let Some(next) = next_focus_index(current, count, backward) {
            event.prevent_default();
            if let Some(element) = nodes
                .item(next as u32)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                let _ = element.focus();
            }
        }
        Ok(())
    })();
    if let Err(err) = trapped {
        log::error!("event=focus_trap_failed module=folio_web error={err:?}");
    }
}

fn schedule_title_focus(title: &HtmlElement) -> Result<(), JsValue> {
    let title = title.clone();
    let closure = Closure::wrap(Box::new(move || {
        let _ = title.focus();
    }) as Box<dyn FnMut()>);
    dom::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            FOCUS_DELAY_MS,
        )?;
    closure.forget();
    Ok(())
}
