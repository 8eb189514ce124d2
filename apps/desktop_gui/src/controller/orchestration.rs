//! Routes page events through the reducer and hands resulting commands to
//! the effect runtime.

use crossbeam_channel::Receiver;
use page_core::{page::PageEvent, ContactCommand, EffectRuntime, Page};

pub fn dispatch_page_event(page: &mut Page, effects: &mut EffectRuntime, event: PageEvent) {
    let event_name = match &event {
        PageEvent::Reveal(_) => "reveal",
        PageEvent::Section(_) => "section",
        PageEvent::Contact(_) => "contact",
        PageEvent::FieldEdited { .. } => "field_edited",
        PageEvent::SubmitRequested => "submit_requested",
    };

    for command in page.dispatch(event) {
        let cmd_name = match &command {
            ContactCommand::Submit { .. } => "submit",
            ContactCommand::ScheduleStatusReset { .. } => "schedule_status_reset",
            ContactCommand::CancelPending => "cancel_pending",
        };
        tracing::debug!(event = event_name, command = cmd_name, "queued page effect");
        effects.execute(command);
    }
}

/// Applies everything the effect runtime delivered since the last frame.
pub fn drain_effect_events(
    page: &mut Page,
    effects: &mut EffectRuntime,
    events: &Receiver<PageEvent>,
) -> usize {
    let mut applied = 0;
    while let Ok(event) = events.try_recv() {
        dispatch_page_event(page, effects, event);
        applied += 1;
    }
    applied
}
