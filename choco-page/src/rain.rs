//! Geometry for the decorative rain overlay on the hero section.

use crate::constants::RAIN_MIN_VIEWPORT_PX;
use rand::Rng;

/// Shared falling animation, injected into the page once.
pub const FALL_KEYFRAMES: &str =
    "@keyframes fall { to { transform: translateY(calc(100vh + 50px)); } }";

/// One randomized falling line.
#[derive(Debug, Clone, PartialEq)]
pub struct RainDrop {
    pub height_px: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

impl RainDrop {
    /// Sample one drop; every field stays in the band the effect was tuned
    /// for so no line dominates the hero visually.
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            height_px: rng.gen_range(20.0..50.0),
            left_pct: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(1.0..3.0),
            delay_s: rng.gen_range(0.0..2.0),
            opacity: rng.gen_range(0.2..0.5),
        }
    }

    /// Full inline style of the drop element.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: 1px; height: {:.2}px; \
             background: linear-gradient(transparent, rgba(26, 117, 159, 0.3)); \
             top: -50px; left: {:.2}%; animation: fall {:.2}s linear infinite; \
             animation-delay: {:.2}s; opacity: {:.2}; z-index: 1;",
            self.height_px, self.left_pct, self.duration_s, self.delay_s, self.opacity
        )
    }
}

/// The effect only runs when the hero exists and the viewport is wide
/// enough for the lines to read as rain rather than clutter.
#[must_use]
pub fn should_render(has_hero: bool, viewport_width: f64) -> bool {
    has_hero && viewport_width >= RAIN_MIN_VIEWPORT_PX
}
