//! One-shot section reveal.
//!
//! A section is observed until it is at least `REVEAL_THRESHOLD` visible, then
//! its latch fires and observation stops for good. Ratios come back from the
//! browser as floats, so the comparison absorbs rounding noise only
//! (`RATIO_TOLERANCE`); 9.95% visible is still below 10%.

use std::collections::BTreeSet;

use super::sections::SectionId;

/// Fraction of a section that must be inside the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

const RATIO_TOLERANCE: f64 = 1e-9;

/// Whether an intersection report is enough to fire a latch.
pub fn crosses_threshold(ratio: f64, is_intersecting: bool) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= REVEAL_THRESHOLD
}

/// What an observer should do after handling an intersection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Latch fired just now; disconnect.
    Revealed,
    /// Not visible enough yet; keep observing.
    Pending,
    /// Latch had already fired; disconnect.
    AlreadyRevealed,
}

impl RevealOutcome {
    pub fn should_disconnect(self) -> bool {
        !matches!(self, RevealOutcome::Pending)
    }
}

/// Set of revealed sections. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealLatches {
    revealed: BTreeSet<SectionId>,
}

impl RevealLatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(&id)
    }

    fn fire(&mut self, id: SectionId) -> bool {
        self.revealed.insert(id)
    }

    /// Feed one intersection report for `id`.
    pub fn observe(&mut self, id: SectionId, ratio: f64, is_intersecting: bool) -> RevealOutcome {
        if self.is_revealed(id) {
            return RevealOutcome::AlreadyRevealed;
        }
        if crosses_threshold(ratio, is_intersecting) {
            self.fire(id);
            RevealOutcome::Revealed
        } else {
            RevealOutcome::Pending
        }
    }
}
