// Accessibility helpers

use choco_page::TextScale;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;

/// Mirror the high-contrast flag onto the page body.
///
/// Adds or removes the `high-contrast` class; the stylesheet does the rest.
pub fn apply_high_contrast(enabled: bool) {
    if let Some(body) = dom::document().body() {
        let _ = if enabled {
            body.class_list().add_1("high-contrast")
        } else {
            body.class_list().remove_1("high-contrast")
        };
    }
}

/// Write the root font size so every rem-based rule scales with it.
pub fn apply_text_scale(scale: TextScale) {
    if let Some(html) = dom::document()
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
    {
        let _ = html.style().set_property("font-size", &scale.css());
    }
}
