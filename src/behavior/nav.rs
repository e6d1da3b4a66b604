//! Navigation synchronizer.
//!
//! Keeps the nav bar and the visible page in agreement: a click scrolls to
//! the section and marks it active right away, and visibility entries mark
//! whatever section crossed into the active band.

use super::section::SectionId;
use super::visibility::IntersectionEntry;

/// Something that can bring a section into view.
pub trait Scroller {
    /// Smoothly scrolls so the top of `section` is in view.
    ///
    /// Returns false when the section is not present.
    fn scroll_into_view(&mut self, section: SectionId) -> bool;
}

/// Tracks the active section and which nav entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSynchronizer {
    active: SectionId,
    highlighted: Option<SectionId>,
}

impl NavSynchronizer {
    /// Creates a synchronizer with `Hero` active and nothing highlighted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: SectionId::Hero,
            highlighted: None,
        }
    }

    /// Currently active section.
    pub const fn active(&self) -> SectionId {
        self.active
    }

    /// Highlighted nav entry, `None` until the first activation.
    pub const fn highlighted(&self) -> Option<SectionId> {
        self.highlighted
    }

    /// Whether the nav entry for `section` is highlighted.
    pub fn is_highlighted(&self, section: SectionId) -> bool {
        self.highlighted == Some(section)
    }

    /// Handles a nav click.
    ///
    /// The section becomes active immediately, without waiting for the
    /// scroll to finish or for a visibility entry to confirm it.
    pub fn click(&mut self, section: SectionId, scroller: &mut dyn Scroller) {
        if !scroller.scroll_into_view(section) {
            tracing::debug!(%section, "nav target not present, highlighting anyway");
        }
        self.activate(section);
    }

    /// Applies a batch of visibility entries in delivery order.
    ///
    /// Every intersecting entry activates its section, so the last one in
    /// the batch wins. Returns the section activated by this batch, if any.
    pub fn apply_entries(&mut self, entries: &[IntersectionEntry]) -> Option<SectionId> {
        let mut winner = None;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            self.activate(entry.section);
            winner = Some(entry.section);
        }
        winner
    }

    fn activate(&mut self, section: SectionId) {
        self.active = section;
        self.highlighted = Some(section);
    }
}

impl Default for NavSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingScroller {
        scrolled: Vec<SectionId>,
        missing: Option<SectionId>,
    }

    impl Scroller for RecordingScroller {
        fn scroll_into_view(&mut self, section: SectionId) -> bool {
            if self.missing == Some(section) {
                return false;
            }
            self.scrolled.push(section);
            true
        }
    }

    fn entry(section: SectionId, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            section,
            is_intersecting,
            ratio: if is_intersecting { 1.0 } else { 0.0 },
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = NavSynchronizer::new();
        assert_eq!(nav.active(), SectionId::Hero);
        assert_eq!(nav.highlighted(), None);
    }

    #[test]
    fn test_click_every_section() {
        for section in SectionId::ALL {
            let mut nav = NavSynchronizer::new();
            let mut scroller = RecordingScroller::default();
            nav.click(section, &mut scroller);
            assert_eq!(nav.active(), section);
            assert!(nav.is_highlighted(section));
            assert_eq!(scroller.scrolled, vec![section]);
        }
    }

    #[test]
    fn test_click_missing_target_still_activates() {
        let mut nav = NavSynchronizer::new();
        let mut scroller = RecordingScroller {
            missing: Some(SectionId::Skills),
            ..RecordingScroller::default()
        };
        nav.click(SectionId::Skills, &mut scroller);
        assert_eq!(nav.active(), SectionId::Skills);
        assert!(scroller.scrolled.is_empty());
    }

    #[test]
    fn test_last_intersecting_entry_wins() {
        let mut nav = NavSynchronizer::new();
        let winner = nav.apply_entries(&[
            entry(SectionId::About, true),
            entry(SectionId::Projects, true),
            entry(SectionId::Hero, false),
        ]);
        assert_eq!(winner, Some(SectionId::Projects));
        assert_eq!(nav.active(), SectionId::Projects);
    }

    #[test]
    fn test_non_intersecting_entries_ignored() {
        let mut nav = NavSynchronizer::new();
        nav.apply_entries(&[entry(SectionId::Skills, true)]);
        let winner = nav.apply_entries(&[entry(SectionId::Skills, false)]);
        assert_eq!(winner, None);
        assert_eq!(nav.active(), SectionId::Skills);
        assert!(nav.is_highlighted(SectionId::Skills));
    }

    #[test]
    fn test_exactly_one_highlight_after_activation() {
        let mut nav = NavSynchronizer::new();
        let mut scroller = RecordingScroller::default();
        nav.apply_entries(&[entry(SectionId::Experience, true)]);
        nav.click(SectionId::Contact, &mut scroller);
        nav.apply_entries(&[entry(SectionId::Achievements, true)]);

        let highlighted: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|s| nav.is_highlighted(*s))
            .collect();
        assert_eq!(highlighted, vec![nav.active()]);
    }
}
