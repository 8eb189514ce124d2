//! Executes contact commands on a tokio runtime and feeds results back as
//! page events.
//!
//! Every spawned task is owned here: cancelling or dropping the runtime
//! aborts whatever is still pending, so no timer outlives its page.

use std::sync::Arc;

use crossbeam_channel::Sender;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    contact::{ContactCommand, ContactEvent},
    page::PageEvent,
    submit::ContactSubmitter,
};

pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub struct EffectRuntime {
    handle: Handle,
    submitter: Arc<dyn ContactSubmitter>,
    events: Sender<PageEvent>,
    repaint: Option<RepaintHook>,
    tasks: Vec<JoinHandle<()>>,
}

impl EffectRuntime {
    /// `events` should be unbounded: tasks deliver with a non-blocking send.
    pub fn new(
        handle: Handle,
        submitter: Arc<dyn ContactSubmitter>,
        events: Sender<PageEvent>,
    ) -> Self {
        Self {
            handle,
            submitter,
            events,
            repaint: None,
            tasks: Vec::new(),
        }
    }

    /// Called after each delivered event, e.g. to wake an idle UI.
    pub fn with_repaint_hook(mut self, repaint: RepaintHook) -> Self {
        self.repaint = Some(repaint);
        self
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    pub fn execute(&mut self, command: ContactCommand) {
        self.tasks.retain(|task| !task.is_finished());

        match command {
            ContactCommand::Submit { cycle, payload } => {
                let submitter = Arc::clone(&self.submitter);
                let deliver = self.deliverer();
                debug!(cycle = cycle.0, "dispatching contact submission");
                self.spawn(async move {
                    let result = submitter.submit(payload).await;
                    deliver(ContactEvent::SubmissionFinished { cycle, result }.into());
                });
            }
            ContactCommand::ScheduleStatusReset { cycle, after } => {
                let deliver = self.deliverer();
                debug!(cycle = cycle.0, after_ms = after.as_millis() as u64, "status reset scheduled");
                self.spawn(async move {
                    tokio::time::sleep(after).await;
                    deliver(ContactEvent::StatusResetElapsed { cycle }.into());
                });
            }
            ContactCommand::CancelPending => self.cancel_all(),
        }
    }

    pub fn execute_all(&mut self, commands: impl IntoIterator<Item = ContactCommand>) {
        for command in commands {
            self.execute(command);
        }
    }

    pub fn cancel_all(&mut self) {
        let pending = self.pending_tasks();
        for task in self.tasks.drain(..) {
            task.abort();
        }
        if pending > 0 {
            debug!(pending, "cancelled outstanding page tasks");
        }
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.tasks.push(self.handle.spawn(task));
    }

    fn deliverer(&self) -> impl Fn(PageEvent) + Send + 'static {
        let events = self.events.clone();
        let repaint = self.repaint.clone();
        move |event| {
            if events.send(event).is_err() {
                warn!("page event receiver dropped; discarding event");
                return;
            }
            if let Some(repaint) = &repaint {
                repaint();
            }
        }
    }
}

impl Drop for EffectRuntime {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
