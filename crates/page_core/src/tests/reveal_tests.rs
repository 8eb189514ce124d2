use shared::domain::{ElementId, RevealState};

use crate::{
    geometry::Rect,
    reveal::{RevealEvent, VisibilityAnimator, DEFAULT_REVEAL_THRESHOLD},
};

fn viewport(scroll: f32) -> Rect {
    Rect::from_min_size(0.0, scroll, 800.0, 600.0)
}

fn block() -> Rect {
    Rect::from_min_size(0.0, 1000.0, 800.0, 400.0)
}

#[test]
fn stays_hidden_until_block_scrolls_into_view() {
    let mut animator = VisibilityAnimator::new(ElementId(1), DEFAULT_REVEAL_THRESHOLD);
    assert_eq!(animator.state(), RevealState::Hidden);
    assert!(animator.observe(viewport(0.0), Some(block())).is_none());
    assert!(animator.is_observing());

    let event = animator
        .observe(viewport(600.0), Some(block()))
        .expect("block in view");
    assert_eq!(event, RevealEvent::Revealed(ElementId(1)));
    assert!(!animator.is_observing());

    animator.apply(event);
    assert_eq!(animator.state(), RevealState::Revealed);
}

#[test]
fn reveal_is_one_shot_and_never_reverts() {
    let mut animator = VisibilityAnimator::new(ElementId(2), DEFAULT_REVEAL_THRESHOLD);
    let event = animator
        .observe(viewport(900.0), Some(block()))
        .expect("revealed");
    animator.apply(event);

    for scroll in [0.0, 900.0, 5000.0, 900.0] {
        assert!(animator.observe(viewport(scroll), Some(block())).is_none());
        assert_eq!(animator.state(), RevealState::Revealed);
    }

    animator.apply(RevealEvent::Revealed(ElementId(2)));
    assert_eq!(animator.state(), RevealState::Revealed);
}

#[test]
fn sliver_below_threshold_does_not_reveal() {
    let mut animator = VisibilityAnimator::new(ElementId(3), DEFAULT_REVEAL_THRESHOLD);
    // 20px of a 400px block is 5% visible.
    assert!(animator.observe(viewport(420.0), Some(block())).is_none());
    assert_eq!(animator.state(), RevealState::Hidden);
    assert!(animator.observe(viewport(460.0), Some(block())).is_some());
}

#[test]
fn ignores_events_for_other_elements() {
    let mut animator = VisibilityAnimator::new(ElementId(4), DEFAULT_REVEAL_THRESHOLD);
    animator.apply(RevealEvent::Revealed(ElementId(99)));
    assert_eq!(animator.state(), RevealState::Hidden);
    assert!(animator.is_observing());
}

#[test]
fn release_before_any_layout_is_harmless() {
    let mut animator = VisibilityAnimator::new(ElementId(5), DEFAULT_REVEAL_THRESHOLD);
    assert!(animator.observe(viewport(0.0), None).is_none());
    animator.release();
    animator.release();
    assert!(!animator.is_observing());
    assert!(animator.observe(viewport(1000.0), Some(block())).is_none());
    assert_eq!(animator.state(), RevealState::Hidden);
}

#[test]
fn non_finite_threshold_uses_default_fraction() {
    for threshold in [f32::NAN, f32::INFINITY] {
        let mut animator = VisibilityAnimator::new(ElementId(6), threshold);
        // 20px of the 400px block: below the default 10%.
        assert!(animator.observe(viewport(420.0), Some(block())).is_none());
        assert_eq!(
            animator.observe(viewport(620.0), Some(block())),
            Some(RevealEvent::Revealed(ElementId(6))),
            "threshold {threshold}"
        );
    }
}
