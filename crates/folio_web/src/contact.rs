//! Contact form wiring: submit validation, live per-field checks and the
//! auto-dismissing success notice.

use crate::{dom, App};
use folio_core::form::{self, ContactField, ContactInput, ValidationReport, SUCCESS_NOTICE_MS};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

const FIELDS: [ContactField; 3] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Message,
];

pub(crate) fn wire(app: &Rc<App>) -> Result<(), JsValue> {
    let form: HtmlFormElement = dom::element_by_id(&app.document, "contact-form")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#contact-form is not a form"))?;

    let submit_document = app.document.clone();
    let submit_form = form.clone();
    dom::on_event(
        &form,
        "submit",
        Box::new(move |event: Event| {
            event.prevent_default();
            let report = form::validate(&read_input(&submit_document));
            write_report(&submit_document, &report);
            if report.is_valid() {
                submit_form.reset();
                show_success_notice(&submit_document);
            }
        }),
    )?;

    // Live validation while typing, one field at a time.
    let live_document = app.document.clone();
    dom::on_event(
        &form,
        "input",
        Box::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let field = match target.id().as_str() {
                "name" => ContactField::Name,
                "email" => ContactField::Email,
                "message" => ContactField::Message,
                _ => return,
            };
            let value = field_value(&live_document, field);
            write_field_error(&live_document, field, form::validate_field(field, &value));
        }),
    )?;

    Ok(())
}

fn field_id(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "name",
        ContactField::Email => "email",
        ContactField::Message => "message",
    }
}

fn error_id(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "name-error",
        ContactField::Email => "email-error",
        ContactField::Message => "message-error",
    }
}

fn field_value(document: &Document, field: ContactField) -> String {
    let Some(element) = document.get_element_by_id(field_id(field)) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn read_input(document: &Document) -> ContactInput {
    ContactInput {
        name: field_value(document, ContactField::Name),
        email: field_value(document, ContactField::Email),
        message: field_value(document, ContactField::Message),
    }
}

fn write_field_error(document: &Document, field: ContactField, message: Option<&'static str>) {
    if let Some(element) = document.get_element_by_id(error_id(field)) {
        element.set_text_content(Some(message.unwrap_or("")));
    }
}

fn write_report(document: &Document, report: &ValidationReport) {
    for field in FIELDS {
        write_field_error(document, field, report.field(field));
    }
}

/// Shows the success notice and schedules its fixed-duration dismissal.
fn show_success_notice(document: &Document) {
    let Some(notice) = document.get_element_by_id("success-message") else {
        return;
    };
    let _ = notice.class_list().add_1("active");

    let closure = Closure::wrap(Box::new(move || {
        let _ = notice.class_list().remove_1("active");
    }) as Box<dyn FnMut()>);
    if let Ok(window) = dom::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SUCCESS_NOTICE_MS as i32,
        );
    }
    closure.forget();
}
