//! Donation form flow.
//!
//! Preset buttons and the custom amount field are mutually exclusive:
//! picking a preset clears the field, typing into the field deactivates
//! every preset. A valid submission thanks the donor, resets the form and
//! re-activates the default preset.

use std::collections::BTreeMap;

use choco_page::donation::{DEFAULT_PRESET_AMOUNT, DonationError, DonationForm};
use choco_page::notice::Severity;
use gloo::events::EventListener;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

use crate::{dom, i18n, notify};

fn input_value(id: &str) -> String {
    dom::html_by_id::<HtmlInputElement>(id)
        .map(|input| input.value())
        .unwrap_or_default()
}

fn active_preset() -> Option<String> {
    dom::query(".amount-btn.active").and_then(|button| button.get_attribute("data-amount"))
}

fn clear_active(buttons: &[Element]) {
    for button in buttons {
        let _ = button.class_list().remove_1("active");
    }
}

fn snapshot(custom: &HtmlInputElement) -> DonationForm {
    DonationForm {
        name: input_value("donorName"),
        email: input_value("donorEmail"),
        preset_amount: active_preset(),
        custom_amount: custom.value(),
    }
}

/// Wire the preset buttons, the custom amount field and the submit flow.
pub fn init() {
    let Some(custom) = dom::html_by_id::<HtmlInputElement>("customAmount") else {
        return;
    };
    let buttons = dom::query_all(".amount-btn");

    for button in &buttons {
        let pressed = button.clone();
        let all_buttons = buttons.clone();
        let custom = custom.clone();
        let listener = EventListener::new(button, "click", move |_event| {
            clear_active(&all_buttons);
            let _ = pressed.class_list().add_1("active");
            custom.set_value("");
        });
        listener.forget();
    }

    {
        let field = custom.clone();
        let all_buttons = buttons.clone();
        let listener = EventListener::new(&custom, "input", move |_event| {
            if !field.value().is_empty() {
                clear_active(&all_buttons);
            }
        });
        listener.forget();
    }

    let Some(form) = dom::html_by_id::<HtmlFormElement>("donationForm") else {
        return;
    };
    let form_for_submit = form.clone();
    let custom_for_submit = custom.clone();
    let listener = EventListener::new(&form, "submit", move |event| {
        event.prevent_default();

        match snapshot(&custom_for_submit).submit() {
            Ok(receipt) => {
                let mut args = BTreeMap::new();
                args.insert("amount", receipt.amount.as_str());
                notify::show(&i18n::tr("donation.thanks", Some(&args)), Severity::Success);

                form_for_submit.reset();
                clear_active(&buttons);
                let default_selector = format!(".amount-btn[data-amount=\"{DEFAULT_PRESET_AMOUNT}\"]");
                if let Some(default_button) = dom::query(&default_selector) {
                    let _ = default_button.class_list().add_1("active");
                }
            }
            Err(DonationError::Incomplete) => {
                notify::show(&i18n::t("donation.incomplete"), Severity::Error);
            }
            Err(DonationError::InvalidEmail) => {
                notify::show(&i18n::t("donation.invalid-email"), Severity::Error);
            }
        }
    });
    listener.forget();
}
