use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// The page ships in Spanish; it is both the default and the fallback.
pub const DEFAULT_LOCALE: &str = "es";

/// Storage key for the visitor's locale choice.
pub const LOCALE_KEY: &str = "locale";

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("es", include_str!("../i18n/es.json")),
    ("en", include_str!("../i18n/en.json")),
];

struct I18nBundle {
    lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .and_then(|bundle| serde_json::from_str(bundle).ok())
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations(DEFAULT_LOCALE)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback =
        load_translations(DEFAULT_LOCALE).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LOCALE.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LOCALE.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

/// Set the current language for internationalization
///
/// Changes the active language bundle and updates the DOM lang attribute.
/// Persists the language choice to localStorage for future sessions.
/// Unknown locale codes leave the current bundle in place.
pub fn set_lang(lang: &str) {
    if let Some(bundle) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(bundle));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|win| win.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute("lang", lang);
            }
            if let Some(storage) =
                web_sys::window().and_then(|win| win.local_storage().ok().flatten())
            {
                let _ = storage.set_item(LOCALE_KEY, lang);
            }
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let Value::String(text) = value else {
        return None;
    };
    let mut text = text.clone();

    if let Some(args_map) = args {
        for (key, replacement) in args_map {
            let braced = format!("{{{{{key}}}}}"); // {{var}}
            let plain = format!("{{{key}}}"); // {var}
            text = text.replace(&braced, replacement);
            text = text.replace(&plain, replacement);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|value| render_value(value, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key).and_then(|value| render_value(value, args))
            })
    })
}

/// Translate a key to the current language
///
/// Simple translation without variable substitution.
/// Falls back to Spanish if the key is missing from the current language.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
