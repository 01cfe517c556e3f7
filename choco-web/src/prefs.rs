//! `localStorage`-backed preference persistence.
//!
//! Values are written as bare strings under the same keys the page has
//! always used, so hand-written scripts and other pages on the site keep
//! reading them unchanged.

use choco_page::{PreferenceStore, Preferences};
use thiserror::Error;

use crate::dom;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage rejected `{key}`: {message}")]
    Rejected { key: String, message: String },
}

/// Store backed by the window's `localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalPrefs;

impl LocalPrefs {
    fn storage(self) -> Result<web_sys::Storage, PrefsError> {
        dom::local_storage().map_err(|err| PrefsError::Unavailable(dom::js_error_message(&err)))
    }
}

impl PreferenceStore for LocalPrefs {
    type Error = PrefsError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.storage()?
            .get_item(key)
            .map_err(|err| PrefsError::Rejected {
                key: key.to_string(),
                message: dom::js_error_message(&err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| PrefsError::Rejected {
                key: key.to_string(),
                message: dom::js_error_message(&err),
            })
    }
}

/// Typed preference view shared by every controller.
#[must_use]
pub fn preferences() -> Preferences<LocalPrefs> {
    Preferences::new(LocalPrefs)
}
