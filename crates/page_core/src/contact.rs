//! Contact form state and its submission status machine.
//!
//! The controller is pure: it never sleeps or spawns. Every side effect is
//! returned as a [`ContactCommand`] for the effect runtime to carry out, and
//! results come back as [`ContactEvent`]s tagged with the submission cycle
//! that produced them.

use std::time::Duration;

use shared::{
    domain::{ContactPayload, FormField, FormState, SubmissionStatus},
    error::SubmitError,
};
use tracing::{debug, warn};

pub const DEFAULT_STATUS_RESET: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SubmissionCycle(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    SubmissionFinished {
        cycle: SubmissionCycle,
        result: Result<(), SubmitError>,
    },
    StatusResetElapsed {
        cycle: SubmissionCycle,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactCommand {
    Submit {
        cycle: SubmissionCycle,
        payload: ContactPayload,
    },
    ScheduleStatusReset {
        cycle: SubmissionCycle,
        after: Duration,
    },
    CancelPending,
}

#[derive(Debug)]
pub struct ContactFormController {
    form: FormState,
    status: SubmissionStatus,
    cycle: SubmissionCycle,
    status_reset: Duration,
}

impl Default for ContactFormController {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_RESET)
    }
}

impl ContactFormController {
    pub fn new(status_reset: Duration) -> Self {
        Self {
            form: FormState::default(),
            status: SubmissionStatus::Idle,
            cycle: SubmissionCycle::default(),
            status_reset,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn cycle(&self) -> SubmissionCycle {
        self.cycle
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.form.field_mut(field) = value.into();
    }

    /// Starts a submission if the form is idle.
    ///
    /// Returns no commands while a submission is in flight or its outcome is
    /// still on display.
    pub fn submit(&mut self) -> Vec<ContactCommand> {
        if !self.status.accepts_submit() {
            debug!(status = ?self.status, "submit ignored; form is not idle");
            return Vec::new();
        }

        self.cycle = SubmissionCycle(self.cycle.0 + 1);
        self.status = SubmissionStatus::Sending;
        debug!(cycle = self.cycle.0, "contact submission started");
        vec![ContactCommand::Submit {
            cycle: self.cycle,
            payload: ContactPayload::from(&self.form),
        }]
    }

    pub fn apply(&mut self, event: ContactEvent) -> Vec<ContactCommand> {
        match event {
            ContactEvent::SubmissionFinished { cycle, result } => {
                if cycle != self.cycle || self.status != SubmissionStatus::Sending {
                    warn!(
                        cycle = cycle.0,
                        current = self.cycle.0,
                        "dropping stale submission result"
                    );
                    return Vec::new();
                }

                match result {
                    Ok(()) => {
                        self.status = SubmissionStatus::Success;
                        self.form.clear();
                        debug!(cycle = cycle.0, "contact submission succeeded");
                    }
                    Err(err) => {
                        self.status = SubmissionStatus::Error;
                        debug!(cycle = cycle.0, code = ?err.code(), "contact submission failed");
                    }
                }

                vec![ContactCommand::ScheduleStatusReset {
                    cycle,
                    after: self.status_reset,
                }]
            }
            ContactEvent::StatusResetElapsed { cycle } => {
                let showing_outcome = matches!(
                    self.status,
                    SubmissionStatus::Success | SubmissionStatus::Error
                );
                if cycle == self.cycle && showing_outcome {
                    self.status = SubmissionStatus::Idle;
                    debug!(cycle = cycle.0, "contact form ready for another submission");
                }
                Vec::new()
            }
        }
    }

    /// Abandons any in-flight work. Results still on their way are ignored
    /// because the cycle moves on.
    pub fn teardown(&mut self) -> Vec<ContactCommand> {
        self.cycle = SubmissionCycle(self.cycle.0 + 1);
        self.status = SubmissionStatus::Idle;
        vec![ContactCommand::CancelPending]
    }
}
