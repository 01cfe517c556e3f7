use std::collections::BTreeMap;

use choco_web::i18n;

#[test]
fn spanish_is_the_default() {
    assert_eq!(i18n::current_lang(), "es");
    assert_eq!(i18n::t("menu.open"), "Abrir menú");
    assert_eq!(i18n::t("access.close"), "Cerrar opciones de accesibilidad");
}

#[test]
fn english_bundle_switches_and_missing_keys_echo() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert_eq!(i18n::t("menu.open"), "Open menu");
    assert_eq!(i18n::t("missing.key"), "missing.key");
}

#[test]
fn donation_thanks_carries_the_amount() {
    let mut args = BTreeMap::new();
    args.insert("amount", "100");
    let message = i18n::tr("donation.thanks", Some(&args));
    assert!(message.contains("$100"), "got: {message}");
}

#[test]
fn color_copy_message_names_the_swatch() {
    let mut args = BTreeMap::new();
    args.insert("name", "Verde Selva");
    args.insert("value", "#2d6a4f");
    let message = i18n::tr("colors.copied", Some(&args));
    assert!(message.contains("\"Verde Selva\""));
    assert!(message.contains("#2d6a4f"));
}

#[test]
fn unknown_locale_keeps_the_current_bundle() {
    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "es");
    assert_eq!(i18n::t("menu.open"), "Abrir menú");
}
