//! Decorative rain over the hero section.

use std::cell::Cell;

use choco_page::constants::RAIN_DROP_COUNT;
use choco_page::rain::{self, FALL_KEYFRAMES, RainDrop};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;

thread_local! {
    static KEYFRAMES_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

fn install_keyframes() {
    if KEYFRAMES_INSTALLED.with(Cell::get) {
        return;
    }
    let document = dom::document();
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(FALL_KEYFRAMES));
    if head.append_child(&style).is_ok() {
        KEYFRAMES_INSTALLED.with(|cell| cell.set(true));
    }
}

fn viewport_width() -> f64 {
    dom::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Fill the hero with falling drops, when there is a hero and room for them.
pub fn start() {
    let hero = dom::query(".hero");
    if !rain::should_render(hero.is_some(), viewport_width()) {
        return;
    }
    let Some(hero) = hero else {
        return;
    };

    let document = dom::document();
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    for _ in 0..RAIN_DROP_COUNT {
        let Ok(drop) = document.create_element("div") else {
            continue;
        };
        drop.set_class_name("rain-drop");
        if let Some(html) = drop.dyn_ref::<HtmlElement>() {
            html.style().set_css_text(&RainDrop::sample(&mut rng).css());
        }
        let _ = hero.append_child(&drop);
    }
    install_keyframes();
}
