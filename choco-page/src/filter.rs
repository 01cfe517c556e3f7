//! Portfolio category filtering and the two-phase fade each card runs.

use crate::constants::{FILTER_CONCEAL_DELAY_MS, FILTER_REVEAL_DELAY_MS};

/// Filter value that matches every card.
pub const ALL_CATEGORIES: &str = "all";

/// Whether a card with the given category stays visible under a filter.
#[must_use]
pub fn card_matches(filter: &str, category: Option<&str>) -> bool {
    filter == ALL_CATEGORIES || category == Some(filter)
}

/// The fade a card runs when the active filter changes.
///
/// Both directions are two-phase: an immediate style write, then a second
/// write after a fixed delay. Revealed cards re-enter layout first and fade
/// in just after, so they never flash unstyled; concealed cards fade out in
/// place and only then leave the layout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    Reveal,
    Conceal,
}

impl CardTransition {
    #[must_use]
    pub const fn from_match(matches: bool) -> Self {
        if matches { Self::Reveal } else { Self::Conceal }
    }

    /// Delay between the two style phases.
    #[must_use]
    pub const fn delay_ms(self) -> u32 {
        match self {
            Self::Reveal => FILTER_REVEAL_DELAY_MS,
            Self::Conceal => FILTER_CONCEAL_DELAY_MS,
        }
    }

    /// Property writes applied the moment the filter changes.
    #[must_use]
    pub const fn immediate_styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Reveal => &[("display", "block")],
            Self::Conceal => &[("opacity", "0"), ("transform", "translateY(20px)")],
        }
    }

    /// Property writes applied once the delay elapses.
    #[must_use]
    pub const fn settled_styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Reveal => &[("opacity", "1"), ("transform", "translateY(0)")],
            Self::Conceal => &[("display", "none")],
        }
    }
}
