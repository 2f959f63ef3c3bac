//! Page view state.
//!
//! `ViewState` is owned by the top-level `Landing` view (inside a `Signal`) and
//! handed to the navbar, reveal sections and scroll-to-top button as a prop.
//! All mutation goes through the methods below so the flags keep their rules:
//!
//! - `language` changes only via `select_language`.
//! - `active_section` starts at `Home` and is never cleared; a scroll sample
//!   with no section on the activation line keeps the previous value.
//! - reveal latches only ever gain entries.
//! - activating a nav link closes the mobile menu.

use crate::i18n::Locale;

use super::reveal::{RevealLatches, RevealOutcome};
use super::scroll::{self, ScrollSample};
use super::sections::SectionId;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub language: Locale,
    pub mobile_menu_open: bool,
    pub scroll_top_visible: bool,
    pub active_section: SectionId,
    revealed: RevealLatches,
}

impl ViewState {
    pub fn new(language: Locale) -> Self {
        Self {
            language,
            mobile_menu_open: false,
            scroll_top_visible: false,
            active_section: SectionId::Home,
            revealed: RevealLatches::new(),
        }
    }

    pub fn select_language(&mut self, language: Locale) {
        if self.language != language {
            tracing::debug!(from = %self.language, to = %language, "language selected");
        }
        self.language = language;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// A navigation link was followed. Scrolling updates the highlight itself.
    pub fn activate_nav_link(&mut self, target: SectionId) {
        tracing::debug!(%target, "nav link activated");
        self.mobile_menu_open = false;
    }

    /// Apply one scroll measurement. Returns true if any flag changed.
    pub fn apply_scroll(&mut self, sample: &ScrollSample) -> bool {
        let visible = scroll::scroll_top_visible(sample.scroll_y);
        let active = scroll::active_section(&sample.sections).unwrap_or(self.active_section);
        let changed = visible != self.scroll_top_visible || active != self.active_section;
        self.scroll_top_visible = visible;
        self.active_section = active;
        changed
    }

    /// Whether applying `sample` would change anything (lets callers skip a
    /// signal write, and the re-render it triggers, on most scroll ticks).
    pub fn scroll_changes(&self, sample: &ScrollSample) -> bool {
        self.clone().apply_scroll(sample)
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.is_revealed(id)
    }

    /// Feed one intersection report for `id` into its reveal latch.
    pub fn observe_intersection(
        &mut self,
        id: SectionId,
        ratio: f64,
        is_intersecting: bool,
    ) -> RevealOutcome {
        let outcome = self.revealed.observe(id, ratio, is_intersecting);
        if outcome == RevealOutcome::Revealed {
            tracing::debug!(section = %id, ratio, "section revealed");
        }
        outcome
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scroll::SectionBounds;

    #[test]
    fn defaults_match_first_load() {
        let state = ViewState::default();
        assert_eq!(state.language, Locale::En);
        assert!(!state.mobile_menu_open);
        assert!(!state.scroll_top_visible);
        assert_eq!(state.active_section, SectionId::Home);
        assert!(SectionId::ALL.iter().all(|id| !state.is_revealed(*id)));
    }

    #[test]
    fn unmatched_sample_keeps_active_section() {
        let mut state = ViewState::default();
        state.apply_scroll(&ScrollSample::new(
            900.0,
            vec![SectionBounds::new(SectionId::Pricing, -20.0, 700.0)],
        ));
        assert_eq!(state.active_section, SectionId::Pricing);

        // Gap between sections: nothing spans the line.
        state.apply_scroll(&ScrollSample::new(
            1700.0,
            vec![SectionBounds::new(SectionId::Works, 180.0, 900.0)],
        ));
        assert_eq!(state.active_section, SectionId::Pricing);
    }

    #[test]
    fn apply_scroll_reports_changes() {
        let mut state = ViewState::default();
        assert!(!state.apply_scroll(&ScrollSample::offset(200.0)));
        assert!(state.apply_scroll(&ScrollSample::offset(800.0)));
        assert!(!state.apply_scroll(&ScrollSample::offset(900.0)));
    }

    #[test]
    fn scroll_changes_does_not_mutate() {
        let state = ViewState::default();
        assert!(state.scroll_changes(&ScrollSample::offset(800.0)));
        assert!(!state.scroll_top_visible);
    }

    #[test]
    fn nav_link_closes_menu_but_keeps_language() {
        let mut state = ViewState::new(Locale::Th);
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);
        state.activate_nav_link(SectionId::Contact);
        assert!(!state.mobile_menu_open);
        assert_eq!(state.language, Locale::Th);
    }

    #[test]
    fn nav_link_with_menu_closed_stays_closed() {
        let mut state = ViewState::default();
        state.activate_nav_link(SectionId::Faq);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn reveal_is_monotonic_across_scrolls() {
        let mut state = ViewState::default();
        assert_eq!(
            state.observe_intersection(SectionId::Services, 0.5, true),
            RevealOutcome::Revealed
        );
        state.apply_scroll(&ScrollSample::offset(0.0));
        state.apply_scroll(&ScrollSample::offset(3000.0));
        assert!(state.is_revealed(SectionId::Services));
        assert_eq!(
            state.observe_intersection(SectionId::Services, 0.0, false),
            RevealOutcome::AlreadyRevealed
        );
    }

    #[test]
    fn intersection_reports_route_through_latches() {
        let mut state = ViewState::default();
        assert_eq!(
            state.observe_intersection(SectionId::How, 0.02, true),
            RevealOutcome::Pending
        );
        assert_eq!(
            state.observe_intersection(SectionId::How, 0.3, true),
            RevealOutcome::Revealed
        );
        assert!(state.is_revealed(SectionId::How));
    }
}
