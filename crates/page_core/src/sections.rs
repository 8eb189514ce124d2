//! Tracks which page section sits in the detection band.

use shared::domain::{ElementId, SectionId};
use tracing::{debug, trace};

use crate::{
    geometry::Rect,
    observer::{IntersectionObserver, LayoutSource, ObserverOptions, RootMargin, Subscription},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    Activated(SectionId),
}

#[derive(Debug, Clone, Copy)]
struct TrackedSection {
    section: SectionId,
    subscription: Subscription,
}

#[derive(Debug)]
pub struct ActiveSectionTracker {
    observer: IntersectionObserver,
    sections: Vec<TrackedSection>,
    active: Option<SectionId>,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(RootMargin::detection_band())
    }
}

impl ActiveSectionTracker {
    pub fn new(root_margin: RootMargin) -> Self {
        Self {
            observer: IntersectionObserver::new(ObserverOptions::with_root_margin(root_margin)),
            sections: Vec::new(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_tracking(&self, section: SectionId) -> bool {
        self.sections.iter().any(|s| s.section == section)
    }

    pub fn tracked_count(&self) -> usize {
        self.sections.len()
    }

    /// Starts tracking `section`, laid out as `element`. Re-registering a
    /// section replaces its previous element.
    pub fn register(&mut self, section: SectionId, element: ElementId) {
        self.unregister(section);
        let subscription = self.observer.observe(element);
        self.sections.push(TrackedSection {
            section,
            subscription,
        });
    }

    pub fn unregister(&mut self, section: SectionId) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.section == section) else {
            return false;
        };
        let tracked = self.sections.remove(index);
        self.observer.unobserve(tracked.subscription);
        true
    }

    /// Processes one frame and reports the section that just entered the band.
    ///
    /// When several sections enter in the same frame, the topmost one wins;
    /// equal tops keep registration order.
    pub fn observe<L>(&mut self, viewport: Rect, layout: &L) -> Option<SectionEvent>
    where
        L: LayoutSource + ?Sized,
    {
        let mut winner: Option<(usize, f32, SectionId)> = None;
        for entry in self.observer.process(viewport, layout) {
            if !entry.is_intersecting {
                continue;
            }
            let Some(order) = self
                .sections
                .iter()
                .position(|s| s.subscription == entry.subscription)
            else {
                continue;
            };
            let section = self.sections[order].section;
            trace!(%section, top = entry.bounds.min_y, "section entered detection band");
            let candidate = (order, entry.bounds.min_y, section);
            winner = match winner {
                Some(best) if (best.1, best.0) <= (candidate.1, candidate.0) => Some(best),
                _ => Some(candidate),
            };
        }
        winner.map(|(_, _, section)| SectionEvent::Activated(section))
    }

    pub fn apply(&mut self, event: SectionEvent) {
        match event {
            SectionEvent::Activated(section) => {
                if self.active != Some(section) {
                    debug!(%section, "active section changed");
                }
                self.active = Some(section);
            }
        }
    }

    pub fn teardown(&mut self) {
        self.observer.disconnect();
        self.sections.clear();
    }
}

impl Drop for ActiveSectionTracker {
    fn drop(&mut self) {
        self.teardown();
    }
}
