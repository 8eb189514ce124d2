use std::time::Duration;

use shared::{
    domain::{ContactPayload, FormField, FormState, SubmissionStatus},
    error::{SubmitError, ValidationFailure},
};

use crate::contact::{ContactCommand, ContactEvent, ContactFormController, SubmissionCycle};

fn fill(controller: &mut ContactFormController, name: &str, email: &str, message: &str) {
    controller.set_field(FormField::Name, name);
    controller.set_field(FormField::Email, email);
    controller.set_field(FormField::Message, message);
}

fn submitted_cycle(commands: &[ContactCommand]) -> (SubmissionCycle, ContactPayload) {
    match commands {
        [ContactCommand::Submit { cycle, payload }] => (*cycle, payload.clone()),
        other => panic!("expected a single submit command, got {other:?}"),
    }
}

#[test]
fn successful_submission_clears_form_then_returns_to_idle() {
    let mut controller = ContactFormController::new(Duration::from_secs(5));
    fill(&mut controller, "Ada", "ada@example.com", "hello");

    let commands = controller.submit();
    let (cycle, payload) = submitted_cycle(&commands);
    assert_eq!(controller.status(), SubmissionStatus::Sending);
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.email, "ada@example.com");
    assert_eq!(payload.message, "hello");

    let commands = controller.apply(ContactEvent::SubmissionFinished {
        cycle,
        result: Ok(()),
    });
    assert_eq!(controller.status(), SubmissionStatus::Success);
    assert_eq!(controller.form(), &FormState::default());
    assert_eq!(
        commands,
        vec![ContactCommand::ScheduleStatusReset {
            cycle,
            after: Duration::from_secs(5),
        }]
    );

    assert!(controller
        .apply(ContactEvent::StatusResetElapsed { cycle })
        .is_empty());
    assert_eq!(controller.status(), SubmissionStatus::Idle);
}

#[test]
fn failed_validation_keeps_form_and_returns_to_idle() {
    let mut controller = ContactFormController::default();
    fill(&mut controller, "", "x@x.com", "hi");

    let (cycle, _) = submitted_cycle(&controller.submit());
    controller.apply(ContactEvent::SubmissionFinished {
        cycle,
        result: Err(SubmitError::from(ValidationFailure)),
    });
    assert_eq!(controller.status(), SubmissionStatus::Error);
    assert_eq!(
        controller.form(),
        &FormState {
            name: String::new(),
            email: "x@x.com".into(),
            message: "hi".into(),
        }
    );

    controller.apply(ContactEvent::StatusResetElapsed { cycle });
    assert_eq!(controller.status(), SubmissionStatus::Idle);
    assert_eq!(controller.form().email, "x@x.com");
}

#[test]
fn submit_while_sending_has_no_effect() {
    let mut controller = ContactFormController::default();
    fill(&mut controller, "Ada", "ada@example.com", "hello");
    let (cycle, _) = submitted_cycle(&controller.submit());

    assert!(controller.submit().is_empty());
    assert!(controller.submit().is_empty());
    assert_eq!(controller.cycle(), cycle);
    assert_eq!(controller.status(), SubmissionStatus::Sending);
}

#[test]
fn submit_while_outcome_is_displayed_has_no_effect() {
    let mut controller = ContactFormController::default();
    fill(&mut controller, "", "", "");
    let (cycle, _) = submitted_cycle(&controller.submit());
    controller.apply(ContactEvent::SubmissionFinished {
        cycle,
        result: Err(ValidationFailure.into()),
    });

    assert!(controller.submit().is_empty());
    assert_eq!(controller.status(), SubmissionStatus::Error);
}

#[test]
fn resubmitting_after_reset_starts_a_new_cycle() {
    let mut controller = ContactFormController::default();
    fill(&mut controller, "", "x@x.com", "hi");
    let (first, _) = submitted_cycle(&controller.submit());
    controller.apply(ContactEvent::SubmissionFinished {
        cycle: first,
        result: Err(ValidationFailure.into()),
    });
    controller.apply(ContactEvent::StatusResetElapsed { cycle: first });

    controller.set_field(FormField::Name, "Ada");
    let (second, payload) = submitted_cycle(&controller.submit());
    assert!(second > first);
    assert_eq!(payload.name, "Ada");
}

#[test]
fn stale_events_from_an_older_cycle_are_ignored() {
    let mut controller = ContactFormController::default();
    fill(&mut controller, "Ada", "ada@example.com", "hello");
    let (cycle, _) = submitted_cycle(&controller.submit());

    let stale = SubmissionCycle(cycle.0 - 1);
    assert!(controller
        .apply(ContactEvent::SubmissionFinished {
            cycle: stale,
            result: Ok(()),
        })
        .is_empty());
    assert_eq!(controller.status(), SubmissionStatus::Sending);

    // A reset for the current cycle cannot cut a submission short.
    controller.apply(ContactEvent::StatusResetElapsed { cycle });
    assert_eq!(controller.status(), SubmissionStatus::Sending);

    // A duplicate completion is dropped once the outcome is recorded.
    controller.apply(ContactEvent::SubmissionFinished {
        cycle,
        result: Ok(()),
    });
    assert!(controller
        .apply(ContactEvent::SubmissionFinished {
            cycle,
            result: Ok(()),
        })
        .is_empty());
}

#[test]
fn teardown_cancels_and_invalidates_in_flight_work() {
    let mut controller = ContactFormController::default();
    fill(&mut controller, "Ada", "ada@example.com", "hello");
    let (cycle, _) = submitted_cycle(&controller.submit());

    assert_eq!(controller.teardown(), vec![ContactCommand::CancelPending]);
    controller.apply(ContactEvent::SubmissionFinished {
        cycle,
        result: Ok(()),
    });
    assert_eq!(controller.status(), SubmissionStatus::Idle);
    assert_eq!(controller.form().name, "Ada");
}

#[test]
fn typing_is_allowed_while_sending() {
    let mut controller = ContactFormController::default();
    fill(&mut controller, "Ada", "ada@example.com", "hello");
    let (_, payload) = submitted_cycle(&controller.submit());

    controller.set_field(FormField::Message, "hello again");
    assert_eq!(payload.message, "hello");
    assert_eq!(controller.form().message, "hello again");
}
