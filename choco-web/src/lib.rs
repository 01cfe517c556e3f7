#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod bootstrap;
pub mod controllers;
pub mod dom;
pub mod i18n;
pub mod notify;
pub mod prefs;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        dom::console_error("logger already initialized");
    }

    // Ensure <html lang> reflects the saved locale before any text shows.
    crate::i18n::set_lang(&crate::i18n::current_lang());

    // The module loads asynchronously, so the DOM may or may not be ready.
    let document = dom::document();
    if document.ready_state() == "loading" {
        let listener = gloo::events::EventListener::new(&document, "DOMContentLoaded", |_event| {
            bootstrap::run();
        });
        listener.forget();
    } else {
        bootstrap::run();
    }
}
