#![cfg(target_arch = "wasm32")]

use choco_page::notice::Severity;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use choco_web::{dom, notify};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset() {
    let body = dom::document().body().expect("document body");
    body.set_inner_html("");
}

#[wasm_bindgen_test]
fn quick_toasts_stack_instead_of_covering_each_other() {
    reset();
    notify::show("primero", Severity::Info);
    notify::show("segundo", Severity::Success);

    let stack = dom::by_id("notificationStack").expect("stack container");
    assert_eq!(stack.child_element_count(), 2);

    let toasts = dom::query_all(".notification");
    assert_eq!(toasts[0].text_content().unwrap_or_default(), "primero");
    assert_eq!(toasts[1].text_content().unwrap_or_default(), "segundo");
    assert!(toasts[0].class_list().contains("notification-info"));
    assert!(toasts[1].class_list().contains("notification-success"));
}

#[wasm_bindgen_test]
async fn a_toast_starts_offscreen_and_slides_in() {
    reset();
    notify::show("hola", Severity::Error);

    let toast = dom::query(".notification-error").expect("toast");
    let style = dom::style(&toast).expect("toast style");
    assert!(
        style
            .get_property_value("transform")
            .unwrap_or_default()
            .contains("400px"),
        "a fresh toast waits off screen"
    );

    TimeoutFuture::new(50).await;
    assert_eq!(
        style.get_property_value("transform").unwrap_or_default(),
        "translateX(0)"
    );
}

#[wasm_bindgen_test]
fn the_stack_is_created_once_and_reused() {
    reset();
    notify::show("uno", Severity::Info);
    notify::show("dos", Severity::Info);
    notify::show("tres", Severity::Info);

    let stacks = dom::query_all("#notificationStack");
    assert_eq!(stacks.len(), 1);
    assert_eq!(stacks[0].child_element_count(), 3);
}
