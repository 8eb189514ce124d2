//! Tokio runtime hosting the page's timed effects, bridged to the UI thread.

use std::sync::Arc;

use anyhow::Context;
use crossbeam_channel::Sender;
use page_core::{page::PageEvent, EffectRuntime, LocalSubmitter, PageSettings};
use tokio::runtime::Runtime;

pub struct BackendRuntime {
    runtime: Runtime,
}

impl BackendRuntime {
    pub fn start() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("portfolio-effects")
            .enable_time()
            .build()
            .context("failed to build backend runtime")?;
        Ok(Self { runtime })
    }

    /// Effect runtime whose results land in `events`; `repaint` wakes the UI.
    pub fn effects(
        &self,
        settings: &PageSettings,
        events: Sender<PageEvent>,
        repaint: impl Fn() + Send + Sync + 'static,
    ) -> EffectRuntime {
        let submitter = Arc::new(LocalSubmitter::new(settings.submit_latency()));
        EffectRuntime::new(self.runtime.handle().clone(), submitter, events)
            .with_repaint_hook(Arc::new(repaint))
    }
}
