//! Light/dark theme selection and the page markers each theme carries.

/// Color theme for the whole page, persisted across visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Body classes the two themes use; applying one always removes the other.
pub const THEME_BODY_CLASSES: [&str; 2] = ["light-mode", "dark-mode"];

impl Theme {
    /// Storage representation, also the wire value of the `theme` preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognized is treated as unset.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme a toggle press switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Exclusive marker class carried by the page body.
    #[must_use]
    pub const fn body_class(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    /// Icon class for the toggle button; shows the mode a press would bring.
    #[must_use]
    pub const fn toggle_icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// i18n key for the toggle's aria-label, announcing the other mode.
    #[must_use]
    pub const fn toggle_label_key(self) -> &'static str {
        match self {
            Self::Light => "theme.to-dark",
            Self::Dark => "theme.to-light",
        }
    }

    /// Initial theme: the persisted choice wins, then the OS preference.
    #[must_use]
    pub fn initial(saved: Option<Self>, os_prefers_dark: bool) -> Self {
        saved.unwrap_or(if os_prefers_dark { Self::Dark } else { Self::Light })
    }
}
