//! Toast severities and the fixed slide timeline every toast runs.

use crate::constants::{TOAST_ENTER_DELAY_MS, TOAST_SLIDE_MS, TOAST_VISIBLE_MS};

/// How a toast is meant to be read, which also picks its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Suffix of the `notification-*` class the toast element carries.
    #[must_use]
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Background color behind the white message text.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Info => "#1a759f",
            Self::Success => "#38b000",
            Self::Error => "#d00000",
        }
    }
}

/// The three waits of a toast's life, in order: settle in the DOM, stay
/// visible, slide away before detaching.
#[must_use]
pub const fn toast_timeline_ms() -> [u32; 3] {
    [TOAST_ENTER_DELAY_MS, TOAST_VISIBLE_MS, TOAST_SLIDE_MS]
}
