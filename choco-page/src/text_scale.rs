//! Root font-size stepper used by the accessibility panel.

/// Page-wide text size in pixels, stepped within a fixed band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextScale(u8);

impl Default for TextScale {
    fn default() -> Self {
        Self(Self::DEFAULT_PX)
    }
}

impl TextScale {
    pub const MIN_PX: u8 = 12;
    pub const MAX_PX: u8 = 24;
    pub const STEP_PX: u8 = 2;
    pub const DEFAULT_PX: u8 = 16;

    /// Build a scale from a pixel count, clamping into the band and snapping
    /// onto the step grid so every restored value stays reachable from the
    /// default by whole steps.
    #[must_use]
    pub fn from_px(px: u8) -> Self {
        let clamped = px.clamp(Self::MIN_PX, Self::MAX_PX);
        let snapped = clamped - ((clamped - Self::MIN_PX) % Self::STEP_PX);
        Self(snapped)
    }

    /// Parse a persisted value; anything non-numeric is treated as unset.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<u8>().ok().map(Self::from_px)
    }

    #[must_use]
    pub const fn px(self) -> u8 {
        self.0
    }

    /// Value written to the root element's `font-size`.
    #[must_use]
    pub fn css(self) -> String {
        format!("{}px", self.0)
    }

    /// One step larger, or `None` when already at the upper bound.
    #[must_use]
    pub const fn increased(self) -> Option<Self> {
        if self.0 < Self::MAX_PX {
            Some(Self(self.0 + Self::STEP_PX))
        } else {
            None
        }
    }

    /// One step smaller, or `None` when already at the lower bound.
    #[must_use]
    pub const fn decreased(self) -> Option<Self> {
        if self.0 > Self::MIN_PX {
            Some(Self(self.0 - Self::STEP_PX))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn reset() -> Self {
        Self(Self::DEFAULT_PX)
    }
}
