//! Share button: native share sheet with a clipboard fallback.

use choco_page::notice::Severity;
use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::ShareData;

use crate::{dom, i18n, notify};

fn page_url() -> String {
    dom::window().location().href().unwrap_or_default()
}

fn supports_native_share() -> bool {
    let navigator = dom::window().navigator();
    Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false)
}

/// Wire the share button.
pub fn init() {
    let Some(button) = dom::query(".share-btn") else {
        return;
    };

    let listener = EventListener::new(&button, "click", move |_event| {
        let text = i18n::t("share.text");
        let url = page_url();

        if supports_native_share() {
            let data = ShareData::new();
            data.set_title(&i18n::t("share.title"));
            data.set_text(&text);
            data.set_url(&url);
            // The browser surfaces its own UI, including cancellation.
            let _ = dom::window().navigator().share_with_data(&data);
        } else {
            spawn_local(async move {
                let clipboard = dom::window().navigator().clipboard();
                let payload = format!("{text} {url}");
                if JsFuture::from(clipboard.write_text(&payload)).await.is_ok() {
                    notify::show(&i18n::t("share.copied"), Severity::Success);
                }
            });
        }
    });
    listener.forget();
}
