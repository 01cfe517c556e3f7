//! Palette swatches that copy their color value on click.

use std::collections::BTreeMap;

use choco_page::constants::SWATCH_PULSE_MS;
use choco_page::notice::Severity;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlElement;

use crate::{dom, i18n, notify};

fn pulse(card: &HtmlElement) {
    let _ = card.style().set_property("transform", "scale(1.1)");
    let card = card.clone();
    Timeout::new(SWATCH_PULSE_MS, move || {
        let _ = card.style().remove_property("transform");
    })
    .forget();
}

/// Wire every `.color-card` swatch.
pub fn init() {
    for card in dom::query_all(".color-card") {
        let clicked = card.clone();
        let listener = EventListener::new(&card, "click", move |_event| {
            let Some(color) = clicked.get_attribute("data-color") else {
                return;
            };
            let name = clicked
                .query_selector("span")
                .ok()
                .flatten()
                .and_then(|span| span.text_content())
                .unwrap_or_default();

            let clipboard = dom::window().navigator().clipboard();
            spawn_local(async move {
                if JsFuture::from(clipboard.write_text(&color)).await.is_ok() {
                    let mut args = BTreeMap::new();
                    args.insert("name", name.as_str());
                    args.insert("value", color.as_str());
                    notify::show(&i18n::tr("colors.copied", Some(&args)), Severity::Info);
                }
            });

            if let Some(html) = clicked.dyn_ref::<HtmlElement>() {
                pulse(html);
            }
        });
        listener.forget();
    }
}
