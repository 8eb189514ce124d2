//! Behavior behind the portfolio page: one-shot reveals, the active
//! navigation section, and the contact form's submission status machine.

pub mod contact;
pub mod geometry;
pub mod observer;
pub mod page;
pub mod reveal;
pub mod runtime;
pub mod sections;
pub mod settings;
pub mod submit;

pub use contact::{ContactCommand, ContactEvent, ContactFormController, SubmissionCycle};
pub use geometry::Rect;
pub use observer::{IntersectionObserver, ObserverOptions, RootMargin};
pub use page::{Page, PageEvent};
pub use reveal::{RevealEvent, VisibilityAnimator};
pub use runtime::EffectRuntime;
pub use sections::{ActiveSectionTracker, SectionEvent};
pub use settings::{PageSettings, SettingsError};
pub use submit::{ContactSubmitter, LocalSubmitter};

#[cfg(test)]
#[path = "tests/observer_tests.rs"]
mod observer_tests;

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod reveal_tests;

#[cfg(test)]
#[path = "tests/sections_tests.rs"]
mod sections_tests;

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod contact_tests;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod runtime_tests;

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod settings_tests;
