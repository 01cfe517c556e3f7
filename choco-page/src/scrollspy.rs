//! Resolves which page section owns the current scroll position.

use crate::constants::{SCROLL_HEADER_OFFSET_PX, SCROLL_PROBE_OFFSET_PX};

/// Vertical extent of one `section[id]` as measured in the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section the nav should highlight for a scroll position, if any.
///
/// The probe sits a fixed distance below the real scroll offset so the
/// highlight flips a little before a section touches the viewport top.
/// With overlapping spans the last one in document order wins, matching how
/// the page has always resolved ties.
#[must_use]
pub fn active_section(spans: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + SCROLL_PROBE_OFFSET_PX;
    spans
        .iter()
        .rev()
        .find(|span| span.contains(probe))
        .map(|span| span.id.as_str())
}

/// Scroll destination for a nav click, leaving room for the fixed header.
#[must_use]
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - SCROLL_HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: "inicio".into(), top: 0.0, height: 600.0 },
            SectionSpan { id: "proyectos".into(), top: 600.0, height: 800.0 },
            SectionSpan { id: "donar".into(), top: 1400.0, height: 500.0 },
        ]
    }

    #[test]
    fn probe_offset_leads_the_scroll_position() {
        let spans = page();
        // 520 + 100 lands inside "proyectos" even though the raw offset is
        // still within "inicio".
        assert_eq!(active_section(&spans, 520.0), Some("proyectos"));
        assert_eq!(active_section(&spans, 0.0), Some("inicio"));
        assert_eq!(active_section(&spans, 1350.0), Some("donar"));
    }

    #[test]
    fn past_the_last_section_nothing_is_active() {
        let spans = page();
        assert_eq!(active_section(&spans, 2000.0), None);
    }

    #[test]
    fn section_boundaries_are_half_open() {
        let spans = page();
        // Probe exactly at a boundary belongs to the section that starts there.
        assert_eq!(active_section(&spans, 500.0), Some("proyectos"));
    }

    #[test]
    fn overlapping_spans_resolve_to_the_later_one() {
        let spans = vec![
            SectionSpan { id: "a".into(), top: 0.0, height: 1000.0 },
            SectionSpan { id: "b".into(), top: 400.0, height: 400.0 },
        ];
        assert_eq!(active_section(&spans, 350.0), Some("b"));
    }

    #[test]
    fn scroll_target_reserves_header_room() {
        assert_eq!(scroll_target(600.0), 520.0);
        assert_eq!(scroll_target(0.0), -80.0);
    }
}
