//! Small DOM lookup and listener helpers shared by the wiring modules.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

pub(crate) fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    element_by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HtmlElement")))
}

/// Attaches a page-lifetime event listener.
///
/// The closure is intentionally leaked: listeners installed at startup are
/// never removed while the page lives.
pub(crate) fn on_event(
    target: &EventTarget,
    kind: &str,
    handler: Box<dyn FnMut(Event)>,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
