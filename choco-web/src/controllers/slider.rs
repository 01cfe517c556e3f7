//! Animal spotlight rotation.

use choco_page::constants::SLIDER_INTERVAL_MS;
use choco_page::slider::Rotation;
use gloo::timers::callback::Interval;

use crate::dom;

/// Start the timed rotation across `.animal-card` elements.
///
/// The interval runs for the life of the page; a page without cards never
/// starts one.
pub fn init() {
    let cards = dom::query_all(".animal-card");
    let Some(mut rotation) = Rotation::new(cards.len()) else {
        return;
    };

    Interval::new(SLIDER_INTERVAL_MS, move || {
        for card in &cards {
            let _ = card.class_list().remove_1("active");
        }
        let next = rotation.advance();
        if let Some(card) = cards.get(next) {
            let _ = card.class_list().add_1("active");
        }
    })
    .forget();
}
