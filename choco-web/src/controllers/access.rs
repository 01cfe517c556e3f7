//! Accessibility panel: text size stepper and high-contrast switch.

use std::cell::Cell;
use std::rc::Rc;

use choco_page::TextScale;
use choco_page::notice::Severity;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, Node};

use crate::{a11y, dom, i18n, notify, prefs};

fn set_panel_label(toggle: &Element, open: bool) {
    let label = i18n::t(if open { "access.close" } else { "access.open" });
    let _ = toggle.set_attribute("aria-label", &label);
}

pub fn init() {
    init_panel();
    init_text_stepper();
    init_contrast_switch();
}

fn init_panel() {
    let Some(toggle) = dom::by_id("accessibilityToggle") else {
        return;
    };
    let Some(panel) = dom::by_id("accessibilityPanel") else {
        return;
    };

    {
        let toggle_for_label = toggle.clone();
        let panel = panel.clone();
        let listener = EventListener::new(&toggle, "click", move |_event| {
            let open = panel.class_list().toggle("show").unwrap_or(false);
            set_panel_label(&toggle_for_label, open);
        });
        listener.forget();
    }

    // A click anywhere outside the toggle and the panel closes it.
    let listener = EventListener::new(&dom::document(), "click", move |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
        else {
            return;
        };
        if toggle.contains(Some(&target)) || panel.contains(Some(&target)) {
            return;
        }
        let _ = panel.class_list().remove_1("show");
        set_panel_label(&toggle, false);
    });
    listener.forget();
}

fn step_to(scale: TextScale, message_key: &str) {
    a11y::apply_text_scale(scale);
    prefs::preferences().save_text_scale(scale);
    notify::show(&i18n::t(message_key), Severity::Info);
}

fn init_text_stepper() {
    let (Some(decrease), Some(reset), Some(increase)) = (
        dom::by_id("decreaseText"),
        dom::by_id("resetText"),
        dom::by_id("increaseText"),
    ) else {
        return;
    };

    let saved = prefs::preferences().load_text_scale();
    let scale = Rc::new(Cell::new(saved.unwrap_or_default()));
    // A first visit keeps the stylesheet's own size untouched.
    if saved.is_some() {
        a11y::apply_text_scale(scale.get());
    }

    {
        let scale = Rc::clone(&scale);
        let listener = EventListener::new(&decrease, "click", move |_event| {
            if let Some(smaller) = scale.get().decreased() {
                scale.set(smaller);
                step_to(smaller, "access.text-smaller");
            }
        });
        listener.forget();
    }
    {
        let scale = Rc::clone(&scale);
        let listener = EventListener::new(&reset, "click", move |_event| {
            let fresh = TextScale::reset();
            scale.set(fresh);
            step_to(fresh, "access.text-reset");
        });
        listener.forget();
    }
    {
        let scale = Rc::clone(&scale);
        let listener = EventListener::new(&increase, "click", move |_event| {
            if let Some(larger) = scale.get().increased() {
                scale.set(larger);
                step_to(larger, "access.text-larger");
            }
        });
        listener.forget();
    }
}

fn init_contrast_switch() {
    let Some(switch) = dom::html_by_id::<HtmlInputElement>("highContrastToggle") else {
        return;
    };

    if prefs::preferences().load_high_contrast() == Some(true) {
        switch.set_checked(true);
        a11y::apply_high_contrast(true);
    }

    let field = switch.clone();
    let listener = EventListener::new(&switch, "change", move |_event| {
        let enabled = field.checked();
        a11y::apply_high_contrast(enabled);
        prefs::preferences().save_high_contrast(enabled);
        let message_key = if enabled {
            "access.contrast-on"
        } else {
            "access.contrast-off"
        };
        notify::show(&i18n::t(message_key), Severity::Info);
    });
    listener.forget();
}
