//! Newsletter signup form.

use choco_page::newsletter::{self, SubscribeError};
use choco_page::notice::Severity;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::{dom, i18n, notify};

/// Wire the `.newsletter-form` submit flow.
pub fn init() {
    let Some(form) = dom::query(".newsletter-form") else {
        return;
    };

    let form_for_submit = form.clone();
    let listener = EventListener::new(&form, "submit", move |event| {
        event.prevent_default();

        let Some(input) = form_for_submit
            .query_selector("input[type=\"email\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        match newsletter::subscribe(&input.value()) {
            Ok(_) => {
                notify::show(&i18n::t("newsletter.subscribed"), Severity::Success);
                input.set_value("");
            }
            Err(SubscribeError::InvalidEmail) => {
                notify::show(&i18n::t("newsletter.invalid-email"), Severity::Error);
            }
        }
    });
    listener.forget();
}
