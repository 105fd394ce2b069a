//! Navigation wiring: smooth scroll, scroll-position highlighting and the
//! mobile menu.

use crate::{dom, App};
use folio_core::nav;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

pub(crate) fn wire(app: &Rc<App>) -> Result<(), JsValue> {
    let document = app.document.clone();
    wire_link_clicks(&document)?;
    observe_sections(&document)?;
    wire_menu_toggle(&document)?;
    wire_resize(&document)?;
    Ok(())
}

fn wire_link_clicks(document: &Document) -> Result<(), JsValue> {
    let links = document.query_selector_all(".nav-link")?;
    for index in 0..links.length() {
        let Some(link) = links
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let click_document = document.clone();
        let clicked = link.clone();
        dom::on_event(
            &link,
            "click",
            Box::new(move |event: Event| {
                event.prevent_default();
                let Some(href) = clicked.get_attribute("href") else {
                    return;
                };
                let Ok(Some(section)) = click_document.query_selector(&href) else {
                    return;
                };
                close_menu(&click_document);
                scroll_to_section(&section);
                if let Some(section_id) = clicked.get_attribute("data-section") {
                    highlight(&click_document, &section_id);
                }
            }),
        )?;
    }
    Ok(())
}

fn scroll_to_section(section: &Element) {
    let Some(section) = section.dyn_ref::<HtmlElement>() else {
        return;
    };
    let Ok(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(f64::from(section.offset_top()) - nav::HEADER_SCROLL_OFFSET_PX);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn highlight(document: &Document, section_id: &str) {
    let Ok(links) = document.query_selector_all(".nav-link") else {
        return;
    };
    for index in 0..links.length() {
        let Some(link) = links
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let classes = link.class_list();
        if link.get_attribute("data-section").as_deref() == Some(section_id) {
            let _ = classes.add_1("active");
        } else {
            let _ = classes.remove_1("active");
        }
    }
}

/// Watches the page sections and moves the nav highlight as they scroll
/// into view.
fn observe_sections(document: &Document) -> Result<(), JsValue> {
    let observer_document = document.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let mut reports: Vec<(String, bool)> = Vec::new();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(id) = entry.target().get_attribute("data-section") else {
                    continue;
                };
                reports.push((id, entry.is_intersecting()));
            }
            let reports = reports.iter().map(|(id, hit)| (id.as_str(), *hit));
            if let Some(active) = nav::active_section(reports) {
                highlight(&observer_document, active);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(nav::SECTION_VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    let sections = document.query_selector_all("section[data-section]")?;
    for index in 0..sections.length() {
        if let Some(section) = sections
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&section);
        }
    }
    Ok(())
}

fn wire_menu_toggle(document: &Document) -> Result<(), JsValue> {
    let Some(toggle) = document.query_selector(".menu-toggle")? else {
        return Ok(());
    };

    let toggle_document = document.clone();
    dom::on_event(
        &toggle,
        "click",
        Box::new(move |event: Event| {
            // Keep the document-level outside-click handler below from
            // closing the menu in the same event.
            event.stop_propagation();
            toggle_menu(&toggle_document);
        }),
    )?;

    // Clicks outside the open menu close it.
    let outside_document = document.clone();
    dom::on_event(
        document,
        "click",
        Box::new(move |event: Event| {
            let Ok(Some(nav_list)) = outside_document.query_selector(".nav-list") else {
                return;
            };
            if !nav_list.class_list().contains("active") {
                return;
            }
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let inside = target.closest(".nav-list").ok().flatten().is_some()
                || target.closest(".menu-toggle").ok().flatten().is_some();
            if !inside {
                close_menu(&outside_document);
            }
        }),
    )?;

    Ok(())
}

fn wire_resize(document: &Document) -> Result<(), JsValue> {
    let window = dom::window()?;
    let resize_document = document.clone();
    dom::on_event(
        &window,
        "resize",
        Box::new(move |_event: Event| {
            let width = dom::window()
                .ok()
                .and_then(|window| window.inner_width().ok())
                .and_then(|width| width.as_f64())
                .unwrap_or(0.0);
            if nav::closes_menu_on_resize(width) {
                close_menu(&resize_document);
            }
        }),
    )?;
    Ok(())
}

fn toggle_menu(document: &Document) {
    for selector in [".nav-list", ".menu-toggle"] {
        if let Ok(Some(element)) = document.query_selector(selector) {
            let _ = element.class_list().toggle("active");
        }
    }
}

fn close_menu(document: &Document) {
    for selector in [".nav-list", ".menu-toggle"] {
        if let Ok(Some(element)) = document.query_selector(selector) {
            let _ = element.class_list().remove_1("active");
        }
    }
}
