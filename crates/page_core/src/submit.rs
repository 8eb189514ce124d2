//! Submission boundary for the contact form.

use std::time::Duration;

use async_trait::async_trait;
use shared::{domain::ContactPayload, error::SubmitError};

pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_secs(2);

#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, payload: ContactPayload) -> Result<(), SubmitError>;
}

/// Stand-in for a network call: waits `latency`, then accepts any payload
/// whose fields are all non-empty.
#[derive(Debug, Clone)]
pub struct LocalSubmitter {
    latency: Duration,
}

impl Default for LocalSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LATENCY)
    }
}

impl LocalSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl ContactSubmitter for LocalSubmitter {
    async fn submit(&self, payload: ContactPayload) -> Result<(), SubmitError> {
        tokio::time::sleep(self.latency).await;
        payload.validate()?;
        Ok(())
    }
}
