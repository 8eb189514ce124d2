//! Page composition and the reducer that applies every state change.
//!
//! Observers and the effect runtime only produce [`PageEvent`]s; all
//! mutation goes through [`Page::dispatch`].

use std::collections::BTreeMap;

use shared::domain::{ElementId, FormField, RevealState, SectionId, SubmissionStatus};
use tracing::{debug, info};

use crate::{
    contact::{ContactCommand, ContactEvent, ContactFormController},
    geometry::Rect,
    observer::{LayoutSource, RootMargin},
    reveal::{RevealEvent, VisibilityAnimator, DEFAULT_REVEAL_THRESHOLD},
    sections::{ActiveSectionTracker, SectionEvent},
    settings::PageSettings,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Reveal(RevealEvent),
    Section(SectionEvent),
    Contact(ContactEvent),
    FieldEdited { field: FormField, value: String },
    SubmitRequested,
}

impl From<RevealEvent> for PageEvent {
    fn from(event: RevealEvent) -> Self {
        PageEvent::Reveal(event)
    }
}

impl From<SectionEvent> for PageEvent {
    fn from(event: SectionEvent) -> Self {
        PageEvent::Section(event)
    }
}

impl From<ContactEvent> for PageEvent {
    fn from(event: ContactEvent) -> Self {
        PageEvent::Contact(event)
    }
}

#[derive(Debug)]
pub struct Page {
    reveal_threshold: f32,
    animators: BTreeMap<ElementId, VisibilityAnimator>,
    tracker: ActiveSectionTracker,
    contact: ContactFormController,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(
            DEFAULT_REVEAL_THRESHOLD,
            RootMargin::detection_band(),
            ContactFormController::default(),
        )
    }
}

impl Page {
    pub fn new(
        reveal_threshold: f32,
        section_margin: RootMargin,
        contact: ContactFormController,
    ) -> Self {
        Self {
            reveal_threshold,
            animators: BTreeMap::new(),
            tracker: ActiveSectionTracker::new(section_margin),
            contact,
        }
    }

    /// Builds a page from already validated settings.
    pub fn from_settings(settings: &PageSettings, section_margin: RootMargin) -> Self {
        Self::new(
            settings.reveal_threshold,
            section_margin,
            ContactFormController::new(settings.status_reset()),
        )
    }

    pub fn add_revealable(&mut self, element: ElementId) {
        let threshold = self.reveal_threshold;
        self.animators
            .entry(element)
            .or_insert_with(|| VisibilityAnimator::new(element, threshold));
    }

    /// Drops the block's animator along with its reveal state.
    pub fn remove_revealable(&mut self, element: ElementId) -> bool {
        self.animators.remove(&element).is_some()
    }

    pub fn register_section(&mut self, section: SectionId, element: ElementId) {
        self.tracker.register(section, element);
    }

    pub fn unregister_section(&mut self, section: SectionId) -> bool {
        self.tracker.unregister(section)
    }

    /// Blocks that were never registered report `Revealed`.
    pub fn reveal_state(&self, element: ElementId) -> RevealState {
        self.animators
            .get(&element)
            .map(VisibilityAnimator::state)
            .unwrap_or(RevealState::Revealed)
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.tracker.active()
    }

    pub fn contact(&self) -> &ContactFormController {
        &self.contact
    }

    pub fn status(&self) -> SubmissionStatus {
        self.contact.status()
    }

    /// Runs every observer against this frame's layout and collects the
    /// events they emit. Nothing is applied yet.
    pub fn observe_frame<L>(&mut self, viewport: Rect, layout: &L) -> Vec<PageEvent>
    where
        L: LayoutSource + ?Sized,
    {
        let mut events: Vec<PageEvent> = self
            .animators
            .values_mut()
            .filter(|animator| animator.is_observing())
            .filter_map(|animator| {
                let rect = layout.rect_of(animator.element());
                animator.observe(viewport, rect)
            })
            .map(PageEvent::from)
            .collect();

        if let Some(event) = self.tracker.observe(viewport, layout) {
            events.push(event.into());
        }
        events
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Vec<ContactCommand> {
        match event {
            PageEvent::Reveal(event @ RevealEvent::Revealed(element)) => {
                if let Some(animator) = self.animators.get_mut(&element) {
                    animator.apply(event);
                }
                Vec::new()
            }
            PageEvent::Section(event) => {
                self.tracker.apply(event);
                Vec::new()
            }
            PageEvent::Contact(event) => self.contact.apply(event),
            PageEvent::FieldEdited { field, value } => {
                self.contact.set_field(field, value);
                Vec::new()
            }
            PageEvent::SubmitRequested => self.contact.submit(),
        }
    }

    /// Applies a batch of events and returns the commands they produced, in order.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = PageEvent>) -> Vec<ContactCommand> {
        events
            .into_iter()
            .flat_map(|event| self.dispatch(event))
            .collect()
    }

    pub fn teardown(&mut self) -> Vec<ContactCommand> {
        debug!(
            animators = self.animators.len(),
            sections = self.tracker.tracked_count(),
            "tearing down page observers"
        );
        for animator in self.animators.values_mut() {
            animator.release();
        }
        self.tracker.teardown();
        info!("page torn down");
        self.contact.teardown()
    }
}
