//! Page boot sequence.

use choco_page::constants::RAIN_START_DELAY_MS;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;

use crate::controllers::{
    access, colors, donation, menu, newsletter, portfolio, rain, scrollspy, share, slider, theme,
};
use crate::dom;

/// Bind every controller to the page.
///
/// The order matters only where controllers share markup: the theme runs
/// first so the body carries its mode class before anything else paints,
/// and the menu binds `.nav-link` before the scroll spy adds its own
/// listeners to the same links.
pub fn run() {
    if dom::local_storage().is_err() {
        log::warn!("localStorage unavailable; preferences will not survive reloads");
    }

    theme::init();
    menu::init();
    portfolio::init();
    donation::init();
    access::init();
    slider::init();
    share::init();
    newsletter::init();
    scrollspy::init();
    colors::init();

    refresh_footer_year();

    log::info!("Sitio web de Conservación del Chocó cargado correctamente");
    log::info!("Protegiendo la biodiversidad del Chocó");

    arm_rain();
}

/// Replace the footer's hard-coded year with the current one.
fn refresh_footer_year() {
    let Some(line) = dom::query(".footer-bottom p") else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year().to_string();
    line.set_inner_html(&line.inner_html().replacen("2023", &year, 1));
}

/// The rain waits for the load event plus a beat, so it never competes
/// with the first paint.
fn arm_rain() {
    if dom::document().ready_state() == "complete" {
        Timeout::new(RAIN_START_DELAY_MS, rain::start).forget();
    } else {
        let listener = EventListener::new(&dom::window(), "load", |_event| {
            Timeout::new(RAIN_START_DELAY_MS, rain::start).forget();
        });
        listener.forget();
    }
}
