//! Portfolio category filter buttons.

use choco_page::filter::{CardTransition, card_matches};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;

fn run_transition(card: &HtmlElement, transition: CardTransition) {
    for (property, value) in transition.immediate_styles() {
        let _ = card.style().set_property(property, value);
    }
    let card = card.clone();
    Timeout::new(transition.delay_ms(), move || {
        for (property, value) in transition.settled_styles() {
            let _ = card.style().set_property(property, value);
        }
    })
    .forget();
}

fn apply_filter(filter: &str, cards: &[Element]) {
    for card in cards {
        let category = card.get_attribute("data-category");
        let transition = CardTransition::from_match(card_matches(filter, category.as_deref()));
        if let Some(html) = card.dyn_ref::<HtmlElement>() {
            run_transition(html, transition);
        }
    }
}

/// Wire the filter buttons to the portfolio cards.
pub fn init() {
    let buttons = dom::query_all(".filter-btn");
    let cards = dom::query_all(".portfolio-card");

    for button in &buttons {
        let pressed = button.clone();
        let all_buttons = buttons.clone();
        let cards = cards.clone();
        let listener = EventListener::new(button, "click", move |_event| {
            for other in &all_buttons {
                let _ = other.class_list().remove_1("active");
            }
            let _ = pressed.class_list().add_1("active");

            // A button without a filter value marks itself active but
            // leaves every card alone.
            if let Some(filter) = pressed.get_attribute("data-filter") {
                apply_filter(&filter, &cards);
            }
        });
        listener.forget();
    }
}
