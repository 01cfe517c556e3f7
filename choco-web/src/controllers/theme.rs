//! Light/dark theme toggle.

use std::cell::Cell;
use std::rc::Rc;

use choco_page::theme::{THEME_BODY_CLASSES, Theme};
use gloo::events::EventListener;

use crate::{dom, i18n, prefs};

fn apply(theme: Theme) {
    if let Some(body) = dom::document().body() {
        let class_list = body.class_list();
        for marker in THEME_BODY_CLASSES {
            let _ = class_list.remove_1(marker);
        }
        let _ = class_list.add_1(theme.body_class());
    }

    if let Some(toggle) = dom::by_id("themeToggle") {
        if let Some(icon) = toggle.query_selector("i").ok().flatten() {
            icon.set_class_name(theme.toggle_icon_class());
        }
        let _ = toggle.set_attribute("aria-label", &i18n::t(theme.toggle_label_key()));
    }

    prefs::preferences().save_theme(theme);
}

fn os_prefers_dark() -> bool {
    dom::window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Restore the saved theme, fall back to the OS hint, wire the toggle.
pub fn init() {
    let initial = Theme::initial(prefs::preferences().load_theme(), os_prefers_dark());
    apply(initial);

    let Some(toggle) = dom::by_id("themeToggle") else {
        return;
    };
    let current = Rc::new(Cell::new(initial));
    let listener = EventListener::new(&toggle, "click", move |_event| {
        let next = current.get().toggled();
        current.set(next);
        apply(next);
    });
    listener.forget();
}
