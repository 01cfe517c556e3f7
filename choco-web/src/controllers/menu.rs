//! Mobile navigation drawer.

use gloo::events::EventListener;
use web_sys::Element;

use crate::{dom, i18n};

fn set_toggle_state(toggle: &Element, open: bool) {
    if let Some(icon) = toggle.query_selector("i").ok().flatten() {
        icon.set_class_name(if open { "fas fa-times" } else { "fas fa-bars" });
    }
    let label = i18n::t(if open { "menu.close" } else { "menu.open" });
    let _ = toggle.set_attribute("aria-label", &label);
}

fn set_body_scroll_lock(locked: bool) {
    if let Some(body) = dom::document().body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Wire the hamburger toggle; navigating through any link closes the drawer.
pub fn init() {
    let Some(toggle) = dom::by_id("menuToggle") else {
        return;
    };
    let Some(menu) = dom::by_id("navMenu") else {
        return;
    };

    {
        let toggle_for_state = toggle.clone();
        let menu = menu.clone();
        let listener = EventListener::new(&toggle, "click", move |_event| {
            let open = menu.class_list().toggle("show").unwrap_or(false);
            set_body_scroll_lock(open);
            set_toggle_state(&toggle_for_state, open);
        });
        listener.forget();
    }

    for link in dom::query_all(".nav-link") {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let listener = EventListener::new(&link, "click", move |_event| {
            let _ = menu.class_list().remove_1("show");
            set_toggle_state(&toggle, false);
            set_body_scroll_lock(false);
        });
        listener.forget();
    }
}
