//! One-shot reveal of a page block once it scrolls into view.

use shared::domain::{ElementId, RevealState};
use tracing::debug;

use crate::{
    geometry::Rect,
    observer::{IntersectionObserver, ObserverOptions, Subscription},
};

pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    Revealed(ElementId),
}

#[derive(Debug)]
pub struct VisibilityAnimator {
    element: ElementId,
    state: RevealState,
    observer: IntersectionObserver,
    subscription: Option<Subscription>,
}

impl VisibilityAnimator {
    /// A non-finite `threshold` falls back to [`DEFAULT_REVEAL_THRESHOLD`].
    pub fn new(element: ElementId, threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        let mut observer = IntersectionObserver::new(ObserverOptions::with_threshold(threshold));
        let subscription = Some(observer.observe(element));
        Self {
            element,
            state: RevealState::Hidden,
            observer,
            subscription,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// Feeds one frame of layout. `rect` is `None` while the block is not laid out.
    ///
    /// Emits at most one event over the animator's lifetime: observation stops
    /// as soon as the reveal is reported.
    pub fn observe(&mut self, viewport: Rect, rect: Option<Rect>) -> Option<RevealEvent> {
        let subscription = self.subscription?;
        let layout: Vec<_> = rect.map(|r| (self.element, r)).into_iter().collect();
        let hit = self
            .observer
            .process(viewport, layout.as_slice())
            .into_iter()
            .any(|entry| entry.subscription == subscription && entry.is_intersecting);
        if !hit {
            return None;
        }

        self.release();
        Some(RevealEvent::Revealed(self.element))
    }

    pub fn apply(&mut self, event: RevealEvent) {
        match event {
            RevealEvent::Revealed(element) if element == self.element => {
                if self.state == RevealState::Hidden {
                    debug!(element = element.0, "block revealed");
                }
                self.state = RevealState::Revealed;
                self.release();
            }
            RevealEvent::Revealed(_) => {}
        }
    }

    /// Stops observing. Safe to call any number of times, including before
    /// the block was ever laid out.
    pub fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.observer.unobserve(subscription);
        }
    }
}

impl Drop for VisibilityAnimator {
    fn drop(&mut self) {
        self.release();
    }
}
