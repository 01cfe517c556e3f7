//! Toast notifications anchored to the top-right corner.
//!
//! Toasts stack in a single fixed column so several announcements never
//! cover one another. Each toast slides in from the right, holds, slides
//! back out and removes itself; its timers belong to the toast alone, so
//! earlier toasts never cut a later one short.

use choco_page::constants::{
    TOAST_ENTER_DELAY_MS, TOAST_GAP_PX, TOAST_MAX_WIDTH_PX, TOAST_OFFSCREEN_PX, TOAST_SLIDE_MS,
    TOAST_VISIBLE_MS,
};
use choco_page::notice::Severity;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::dom;

const STACK_ID: &str = "notificationStack";

fn stack() -> Option<Element> {
    let document = dom::document();
    if let Some(existing) = document.get_element_by_id(STACK_ID) {
        return Some(existing);
    }

    let body = document.body()?;
    let stack = document.create_element("div").ok()?;
    stack.set_id(STACK_ID);
    if let Some(html) = stack.dyn_ref::<HtmlElement>() {
        // The stack itself must not swallow clicks meant for the page.
        html.style().set_css_text(&format!(
            "position: fixed; top: 20px; right: 20px; z-index: 1000; \
             display: flex; flex-direction: column; align-items: flex-end; \
             gap: {TOAST_GAP_PX}px; pointer-events: none;"
        ));
    }
    body.append_child(&stack).ok()?;
    Some(stack)
}

/// Show a toast. It manages its own lifetime.
pub fn show(message: &str, severity: Severity) {
    let Some(stack) = stack() else {
        return;
    };
    let Some(toast) = dom::document()
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    toast.set_class_name(&format!(
        "notification notification-{}",
        severity.css_suffix()
    ));
    toast.set_text_content(Some(message));
    toast.style().set_css_text(&format!(
        "background-color: {background}; color: white; padding: 1rem 1.5rem; \
         border-radius: var(--border-radius-md); box-shadow: var(--shadow-lg); \
         transform: translateX({TOAST_OFFSCREEN_PX}px); \
         transition: transform {TOAST_SLIDE_MS}ms ease; font-weight: 500; \
         max-width: {TOAST_MAX_WIDTH_PX}px; pointer-events: auto;",
        background = severity.background(),
    ));
    if stack.append_child(&toast).is_err() {
        return;
    }

    spawn_local(async move {
        // Entering on the next tick lets the off-screen transform land first,
        // so the slide-in actually animates.
        TimeoutFuture::new(TOAST_ENTER_DELAY_MS).await;
        let _ = toast.style().set_property("transform", "translateX(0)");

        TimeoutFuture::new(TOAST_VISIBLE_MS).await;
        let _ = toast
            .style()
            .set_property("transform", &format!("translateX({TOAST_OFFSCREEN_PX}px)"));

        TimeoutFuture::new(TOAST_SLIDE_MS).await;
        toast.remove();
    });
}
