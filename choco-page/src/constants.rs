//! Centralized timing and layout constants for the page behavior.
//!
//! Every duration the controllers schedule and every fixed offset they probe
//! lives here, so the numbers that shape the page's feel can only change
//! through reviewed code.

// Animal slider ------------------------------------------------------------
/// Milliseconds between automatic slide advances.
pub const SLIDER_INTERVAL_MS: u32 = 3000;

// Portfolio filter ---------------------------------------------------------
/// Delay before a re-shown card fades in, long enough for layout to settle.
pub const FILTER_REVEAL_DELAY_MS: u32 = 10;
/// Fade-out duration before a filtered-out card leaves the layout flow.
pub const FILTER_CONCEAL_DELAY_MS: u32 = 300;

// Notifications ------------------------------------------------------------
/// Delay before a freshly appended toast slides into view.
pub const TOAST_ENTER_DELAY_MS: u32 = 10;
/// How long a toast stays fully visible.
pub const TOAST_VISIBLE_MS: u32 = 5000;
/// Duration of the slide-in/slide-out transform transition.
pub const TOAST_SLIDE_MS: u32 = 300;
/// Horizontal off-screen offset a toast slides from and back to.
pub const TOAST_OFFSCREEN_PX: u32 = 400;
/// Vertical gap between stacked toasts.
pub const TOAST_GAP_PX: u32 = 10;
/// Widest a toast is allowed to grow.
pub const TOAST_MAX_WIDTH_PX: u32 = 350;

// Scroll spy ---------------------------------------------------------------
/// Offset added to the scroll position when probing for the active section.
pub const SCROLL_PROBE_OFFSET_PX: f64 = 100.0;
/// Fixed-header allowance subtracted from a section's top when scrolling to it.
pub const SCROLL_HEADER_OFFSET_PX: f64 = 80.0;

// Color cards --------------------------------------------------------------
/// How long a clicked swatch holds its feedback pulse.
pub const SWATCH_PULSE_MS: u32 = 300;

// Rain effect --------------------------------------------------------------
/// Number of falling-line elements the effect creates.
pub const RAIN_DROP_COUNT: usize = 15;
/// Viewports narrower than this skip the effect entirely.
pub const RAIN_MIN_VIEWPORT_PX: f64 = 768.0;
/// Delay after the window load event before the effect starts.
pub const RAIN_START_DELAY_MS: u32 = 1000;
