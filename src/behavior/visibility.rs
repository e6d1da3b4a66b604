//! Scroll-spy visibility notifications.
//!
//! The navigation synchronizer never measures anything itself. It consumes
//! [`IntersectionEntry`] batches from a [`VisibilityNotifier`], so the
//! choice of the active section can be tested with synthetic entries. The
//! [`BandObserver`] is the concrete notifier used by the terminal host.

use std::collections::HashMap;

use super::section::SectionId;

/// Parameters of the active band.
///
/// Margins are fractions of the viewport height cut from the top and the
/// bottom. A section qualifies when at least `threshold` of it (or of the
/// band, whichever is shorter) lies inside the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    /// Minimum intersection ratio, 0.0..=1.0
    pub threshold: f64,
    /// Fraction of the viewport excluded at the top
    pub top_margin: f64,
    /// Fraction of the viewport excluded at the bottom
    pub bottom_margin: f64,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            top_margin: 0.2,
            bottom_margin: 0.8,
        }
    }
}

/// Vertical extent of a section container, in page rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// Section occupying the rows
    pub section: SectionId,
    /// First row of the section
    pub top: u32,
    /// Number of rows
    pub height: u32,
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible page row
    pub offset: u32,
    /// Number of visible rows
    pub height: u32,
}

/// A change in a section's qualifying state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Section whose state changed
    pub section: SectionId,
    /// Whether the section now qualifies as active
    pub is_intersecting: bool,
    /// Measured intersection ratio
    pub ratio: f64,
}

/// Injected scroll-spy capability.
pub trait VisibilityNotifier {
    /// Starts observing `targets`, replacing any previous target list.
    fn observe(&mut self, targets: Vec<SectionBounds>);

    /// Measures against `viewport` and returns the entries that changed.
    fn check(&mut self, viewport: Viewport) -> Vec<IntersectionEntry>;

    /// Stops observing. Later checks return nothing.
    fn disconnect(&mut self);

    /// Whether the notifier currently observes anything.
    fn is_connected(&self) -> bool;
}

/// Band-based notifier modelled on an intersection observer with a root
/// margin.
///
/// Entries are emitted only when a section's qualifying state changes.
/// The first check after a section starts being observed always reports
/// it, which gives the initial notification.
#[derive(Debug, Clone)]
pub struct BandObserver {
    options: VisibilityOptions,
    targets: Vec<SectionBounds>,
    last: HashMap<SectionId, bool>,
}

impl BandObserver {
    /// Creates a disconnected observer.
    #[must_use]
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
            last: HashMap::new(),
        }
    }

    /// Returns `(top, bottom)` of the active band in page rows.
    ///
    /// When the margins leave no room the band collapses to the single row
    /// at the top margin.
    #[must_use]
    pub fn band(&self, viewport: Viewport) -> (f64, f64) {
        let height = f64::from(viewport.height);
        let offset = f64::from(viewport.offset);
        let top = (offset + self.options.top_margin * height).floor();
        let bottom = (offset + height - self.options.bottom_margin * height).floor();
        if bottom <= top {
            (top, top + 1.0)
        } else {
            (top, bottom)
        }
    }

    /// Intersection ratio of `bounds` with the band for `viewport`.
    #[must_use]
    pub fn ratio(&self, bounds: SectionBounds, viewport: Viewport) -> f64 {
        let (band_top, band_bottom) = self.band(viewport);
        let top = f64::from(bounds.top);
        let bottom = top + f64::from(bounds.height);
        let overlap = (bottom.min(band_bottom) - top.max(band_top)).max(0.0);
        let denom = f64::from(bounds.height).min(band_bottom - band_top);
        if denom <= 0.0 {
            0.0
        } else {
            overlap / denom
        }
    }

    fn qualifies(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.options.threshold
    }
}

impl Default for BandObserver {
    fn default() -> Self {
        Self::new(VisibilityOptions::default())
    }
}

impl VisibilityNotifier for BandObserver {
    fn observe(&mut self, targets: Vec<SectionBounds>) {
        // Keep state for sections that are still observed so a relayout
        // does not re-announce them.
        self.last
            .retain(|section, _| targets.iter().any(|t| t.section == *section));
        self.targets = targets;
    }

    fn check(&mut self, viewport: Viewport) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for bounds in &self.targets {
            let ratio = self.ratio(*bounds, viewport);
            let is_intersecting = self.qualifies(ratio);
            if self.last.get(&bounds.section) != Some(&is_intersecting) {
                entries.push(IntersectionEntry {
                    section: bounds.section,
                    is_intersecting,
                    ratio,
                });
            }
        }
        for entry in &entries {
            self.last.insert(entry.section, entry.is_intersecting);
        }
        entries
    }

    fn disconnect(&mut self) {
        self.targets.clear();
        self.last.clear();
    }

    fn is_connected(&self) -> bool {
        !self.targets.is_empty()
    }
}
