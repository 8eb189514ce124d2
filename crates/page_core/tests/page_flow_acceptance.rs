use std::{collections::BTreeMap, sync::Arc, time::Duration};

use crossbeam_channel::unbounded;
use page_core::{
    page::{Page, PageEvent},
    EffectRuntime, LocalSubmitter, PageSettings, Rect,
};
use shared::domain::{ElementId, FormField, FormState, RevealState, SectionId, SubmissionStatus};
use tokio::runtime::Handle;

const ABOUT: ElementId = ElementId(1);
const PROJECTS: ElementId = ElementId(2);
const CONTACT: ElementId = ElementId(3);
const HERO_BLOCK: ElementId = ElementId(100);
const PROJECT_CARD: ElementId = ElementId(101);
const CONTACT_BLOCK: ElementId = ElementId(102);

fn layout() -> BTreeMap<ElementId, Rect> {
    BTreeMap::from([
        (ABOUT, Rect::from_min_size(0.0, 0.0, 1280.0, 800.0)),
        (HERO_BLOCK, Rect::from_min_size(0.0, 100.0, 1280.0, 500.0)),
        (PROJECTS, Rect::from_min_size(0.0, 800.0, 1280.0, 1600.0)),
        (PROJECT_CARD, Rect::from_min_size(0.0, 1200.0, 1280.0, 500.0)),
        (CONTACT, Rect::from_min_size(0.0, 2400.0, 1280.0, 900.0)),
        (CONTACT_BLOCK, Rect::from_min_size(0.0, 2500.0, 1280.0, 700.0)),
    ])
}

fn viewport(scroll: f32) -> Rect {
    Rect::from_min_size(0.0, scroll, 1280.0, 800.0)
}

fn build_page() -> Page {
    let settings = PageSettings::default();
    let margin = settings.validate().expect("default settings");
    let mut page = Page::from_settings(&settings, margin);
    page.register_section(SectionId::About, ABOUT);
    page.register_section(SectionId::Projects, PROJECTS);
    page.register_section(SectionId::Contact, CONTACT);
    for element in [HERO_BLOCK, PROJECT_CARD, CONTACT_BLOCK] {
        page.add_revealable(element);
    }
    page
}

fn scroll_to(page: &mut Page, scroll: f32, layout: &BTreeMap<ElementId, Rect>) {
    let events = page.observe_frame(viewport(scroll), layout);
    assert!(page.dispatch_all(events).is_empty());
}

#[test]
fn scrolling_reveals_blocks_once_and_moves_navigation_highlight() {
    let layout = layout();
    let mut page = build_page();
    assert_eq!(page.active_section(), None);

    scroll_to(&mut page, 0.0, &layout);
    assert_eq!(page.active_section(), Some(SectionId::About));
    assert_eq!(page.reveal_state(HERO_BLOCK), RevealState::Revealed);
    assert_eq!(page.reveal_state(PROJECT_CARD), RevealState::Hidden);
    assert_eq!(page.reveal_state(CONTACT_BLOCK), RevealState::Hidden);

    scroll_to(&mut page, 1000.0, &layout);
    assert_eq!(page.active_section(), Some(SectionId::Projects));
    assert_eq!(page.reveal_state(PROJECT_CARD), RevealState::Revealed);

    scroll_to(&mut page, 2400.0, &layout);
    assert_eq!(page.active_section(), Some(SectionId::Contact));
    assert_eq!(page.reveal_state(CONTACT_BLOCK), RevealState::Revealed);

    scroll_to(&mut page, 0.0, &layout);
    assert_eq!(page.active_section(), Some(SectionId::About));
    for block in [HERO_BLOCK, PROJECT_CARD, CONTACT_BLOCK] {
        assert_eq!(page.reveal_state(block), RevealState::Revealed);
    }
}

#[test]
fn removing_blocks_and_sections_mid_observation_is_quiet() {
    let mut layout = layout();
    let mut page = build_page();
    scroll_to(&mut page, 0.0, &layout);

    assert!(page.remove_revealable(PROJECT_CARD));
    assert!(!page.remove_revealable(PROJECT_CARD));
    assert!(page.unregister_section(SectionId::Projects));
    layout.remove(&PROJECT_CARD);
    layout.remove(&PROJECTS);

    scroll_to(&mut page, 1000.0, &layout);
    assert_eq!(page.active_section(), Some(SectionId::About));

    assert_eq!(page.teardown().len(), 1);
    assert!(page.observe_frame(viewport(2400.0), &layout).is_empty());
}

#[tokio::test(start_paused = true)]
async fn contact_form_submission_round_trip() {
    let settings = PageSettings::default();
    let (tx, rx) = unbounded();
    let mut runtime = EffectRuntime::new(
        Handle::current(),
        Arc::new(LocalSubmitter::new(settings.submit_latency())),
        tx,
    );
    let mut page = build_page();

    for (field, value) in [
        (FormField::Name, "Ada"),
        (FormField::Email, "ada@example.com"),
        (FormField::Message, "hello"),
    ] {
        page.dispatch(PageEvent::FieldEdited {
            field,
            value: value.into(),
        });
    }

    let mut observed = vec![page.status()];
    runtime.execute_all(page.dispatch(PageEvent::SubmitRequested));
    observed.push(page.status());

    for _ in 0..12 {
        tokio::time::sleep(Duration::from_millis(700)).await;
        while let Ok(event) = rx.try_recv() {
            runtime.execute_all(page.dispatch(event));
            observed.push(page.status());
        }
    }

    assert_eq!(
        observed,
        vec![
            SubmissionStatus::Idle,
            SubmissionStatus::Sending,
            SubmissionStatus::Success,
            SubmissionStatus::Idle,
        ]
    );
    assert_eq!(page.contact().form(), &FormState::default());
}
