//! Local stand-in for a real endpoint

use super::{SubmissionOutcome, SubmissionStrategy};
use crate::state::FormSnapshot;
use async_trait::async_trait;
use std::time::Duration;

/// Waits a fixed delay, then always succeeds
pub struct SimulatedSubmit {
    delay: Duration,
}

impl SimulatedSubmit {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionStrategy for SimulatedSubmit {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, snapshot: FormSnapshot) -> SubmissionOutcome {
        let fields = snapshot.fields();
        tracing::debug!(
            fields = fields.len(),
            optional = fields.iter().filter(|f| f.optional).count(),
            delay_ms = self.delay.as_millis() as u64,
            "simulating submission"
        );
        tokio::time::sleep(self.delay).await;
        SubmissionOutcome::Success
    }
}
