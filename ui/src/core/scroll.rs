//! Scroll tracking: scroll-to-top visibility and the active section.
//!
//! Both values are pure functions of one layout sample (`ScrollSample`) taken
//! on every scroll event. The browser side only has to measure; everything
//! below runs (and is tested) natively.

use super::sections::SectionId;

/// Scroll offset (px) the page must exceed before the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Distance (px) from the viewport top of the activation line.
pub const ACTIVATION_LINE: f64 = 100.0;

/// Viewport-relative vertical extent of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, bottom: f64) -> Self {
        Self { id, top, bottom }
    }

    /// True when the section spans the activation line (edges inclusive).
    pub fn spans_activation_line(&self) -> bool {
        self.top <= ACTIVATION_LINE && self.bottom >= ACTIVATION_LINE
    }
}

/// One measurement of the page: window offset plus the sections found in the DOM.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub sections: Vec<SectionBounds>,
}

impl ScrollSample {
    pub fn new(scroll_y: f64, sections: Vec<SectionBounds>) -> Self {
        Self { scroll_y, sections }
    }

    /// Sample carrying only an offset (no section measured).
    pub fn offset(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            sections: Vec::new(),
        }
    }
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// First section, in document order, spanning the activation line.
///
/// The scan follows `SectionId::ALL`, not the order of `sections`, so two
/// overlapping matches always resolve the same way. Sections absent from the
/// sample are skipped.
pub fn active_section(sections: &[SectionBounds]) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|id| {
        sections
            .iter()
            .any(|bounds| bounds.id == *id && bounds.spans_activation_line())
    })
}
