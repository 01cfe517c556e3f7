//! Choco page interaction logic
//!
//! Platform-agnostic behavior for the Choco conservation page front-end.
//! This crate owns every decision the page takes: theme selection, the
//! accessibility text stepper, form validation, portfolio filtering, the
//! slide rotation, scroll-spy math, toast timing and rain geometry. It has
//! no browser or platform dependency, so all of it tests natively.

pub mod constants;
pub mod donation;
pub mod email;
pub mod filter;
pub mod newsletter;
pub mod notice;
pub mod rain;
pub mod scrollspy;
pub mod slider;
pub mod text_scale;
pub mod theme;

// Re-export commonly used types
pub use donation::{DEFAULT_PRESET_AMOUNT, DonationError, DonationForm, DonationReceipt};
pub use email::is_valid_email;
pub use filter::{ALL_CATEGORIES, CardTransition, card_matches};
pub use newsletter::{SubscribeError, Subscription, subscribe};
pub use notice::{Severity, toast_timeline_ms};
pub use rain::{FALL_KEYFRAMES, RainDrop};
pub use scrollspy::{SectionSpan, active_section, scroll_target};
pub use slider::Rotation;
pub use text_scale::TextScale;
pub use theme::{THEME_BODY_CLASSES, Theme};

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "theme";
/// Storage key for the persisted root font size.
pub const FONT_SIZE_KEY: &str = "fontSize";
/// Storage key for the persisted high-contrast flag.
pub const HIGH_CONTRAST_KEY: &str = "highContrast";

/// Trait for abstracting preference persistence
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value stored under a key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a raw value under a key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Typed view over the page's persisted preferences.
///
/// Reads absorb storage failures into `None` and writes are best-effort:
/// a visitor without working storage keeps every page behavior except the
/// memory of their choices, which is all the page ever promised.
pub struct Preferences<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn load_theme(&self) -> Option<Theme> {
        self.raw(THEME_KEY).and_then(|value| Theme::parse(&value))
    }

    pub fn save_theme(&self, theme: Theme) {
        self.put(THEME_KEY, theme.as_str());
    }

    #[must_use]
    pub fn load_text_scale(&self) -> Option<TextScale> {
        self.raw(FONT_SIZE_KEY)
            .and_then(|value| TextScale::parse(&value))
    }

    pub fn save_text_scale(&self, scale: TextScale) {
        self.put(FONT_SIZE_KEY, &scale.px().to_string());
    }

    #[must_use]
    pub fn load_high_contrast(&self) -> Option<bool> {
        self.raw(HIGH_CONTRAST_KEY)
            .and_then(|value| match value.as_str() {
                "enabled" => Some(true),
                "disabled" => Some(false),
                _ => None,
            })
    }

    pub fn save_high_contrast(&self, enabled: bool) {
        self.put(
            HIGH_CONTRAST_KEY,
            if enabled { "enabled" } else { "disabled" },
        );
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.store.get(key).ok().flatten()
    }

    fn put(&self, key: &str, value: &str) {
        let _ = self.store.set(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryPrefs {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryPrefs {
        fn raw(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryPrefs {
        type Error = Infallible;

        fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn theme_round_trips_through_its_wire_value() {
        let store = MemoryPrefs::default();
        let prefs = Preferences::new(store.clone());
        for theme in [Theme::Light, Theme::Dark] {
            prefs.save_theme(theme);
            assert_eq!(store.raw(THEME_KEY).as_deref(), Some(theme.as_str()));
            assert_eq!(prefs.load_theme(), Some(theme));
        }
    }

    #[test]
    fn text_scale_persists_the_bare_pixel_count() {
        let store = MemoryPrefs::default();
        let prefs = Preferences::new(store.clone());
        prefs.save_text_scale(TextScale::from_px(20));
        assert_eq!(store.raw(FONT_SIZE_KEY).as_deref(), Some("20"));
        assert_eq!(prefs.load_text_scale(), Some(TextScale::from_px(20)));
    }

    #[test]
    fn high_contrast_uses_the_enabled_disabled_words() {
        let store = MemoryPrefs::default();
        let prefs = Preferences::new(store.clone());
        prefs.save_high_contrast(true);
        assert_eq!(store.raw(HIGH_CONTRAST_KEY).as_deref(), Some("enabled"));
        assert_eq!(prefs.load_high_contrast(), Some(true));
        prefs.save_high_contrast(false);
        assert_eq!(store.raw(HIGH_CONTRAST_KEY).as_deref(), Some("disabled"));
        assert_eq!(prefs.load_high_contrast(), Some(false));
    }

    #[test]
    fn absent_or_corrupt_values_load_as_unset() {
        let store = MemoryPrefs::default();
        let prefs = Preferences::new(store.clone());
        assert_eq!(prefs.load_theme(), None);
        assert_eq!(prefs.load_text_scale(), None);
        assert_eq!(prefs.load_high_contrast(), None);

        store.set(THEME_KEY, "plaid").unwrap();
        store.set(FONT_SIZE_KEY, "big").unwrap();
        store.set(HIGH_CONTRAST_KEY, "1").unwrap();
        assert_eq!(prefs.load_theme(), None);
        assert_eq!(prefs.load_text_scale(), None);
        assert_eq!(prefs.load_high_contrast(), None);
    }
}
