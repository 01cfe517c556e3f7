//! Section tracking and smooth anchor scrolling.

use choco_page::scrollspy::{SectionSpan, active_section, scroll_target};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

fn section_spans() -> Vec<SectionSpan> {
    dom::query_all("section[id]")
        .into_iter()
        .filter_map(|section| {
            let id = section.id();
            let html = section.dyn_into::<HtmlElement>().ok()?;
            Some(SectionSpan {
                id,
                top: f64::from(html.offset_top()),
                height: f64::from(html.client_height()),
            })
        })
        .collect()
}

fn highlight(section_id: &str) {
    let target = format!("#{section_id}");
    for link in dom::query_all(".nav-link") {
        let _ = link.class_list().remove_1("active");
        if link.get_attribute("href").as_deref() == Some(target.as_str()) {
            let _ = link.class_list().add_1("active");
        }
    }
}

/// Track the reading position and smooth-scroll nav clicks to their section.
pub fn init() {
    let listener = EventListener::new(&dom::window(), "scroll", move |_event| {
        let scroll_y = dom::window().scroll_y().unwrap_or(0.0);
        // Sections are re-measured on every event; images and fonts keep
        // moving them around well after load.
        let spans = section_spans();
        if let Some(active) = active_section(&spans, scroll_y) {
            highlight(active);
        }
    });
    listener.forget();

    for link in dom::query_all(".nav-link") {
        let clicked = link.clone();
        let listener = EventListener::new(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = clicked.get_attribute("href") else {
                return;
            };
            let Some(section) = dom::query(&href).and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(scroll_target(f64::from(section.offset_top())));
            options.set_behavior(ScrollBehavior::Smooth);
            dom::window().scroll_to_with_scroll_to_options(&options);
        });
        listener.forget();
    }
}
