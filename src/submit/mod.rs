//! Submission strategies
//!
//! A strategy turns a captured snapshot into a `SubmissionOutcome`. The
//! controller only sees the trait; which implementation runs is decided once
//! from configuration.

mod remote;
mod simulated;

pub use remote::RemoteSubmit;
pub use simulated::SimulatedSubmit;

use crate::config::{FormConfig, SubmissionMode};
use crate::state::FormSnapshot;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    /// The endpoint answered with a non-200 status
    Failure(String),
    /// The request or the response body could not be processed
    NetworkError(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Trait for submission backends, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionStrategy: Send + Sync {
    /// Short name shown in the status bar
    fn name(&self) -> &'static str;

    /// Submit a snapshot. Never fails: every error maps to an outcome.
    async fn submit(&self, snapshot: FormSnapshot) -> SubmissionOutcome;
}

/// Build the configured strategy
pub fn build_strategy(config: &FormConfig) -> Result<Arc<dyn SubmissionStrategy>> {
    match config.mode() {
        SubmissionMode::Remote => {
            let endpoint = config.endpoint.clone().ok_or_else(|| {
                anyhow!(
                    "remote mode needs an endpoint (set \"endpoint\" or {})",
                    crate::config::ENDPOINT_ENV
                )
            })?;
            Ok(Arc::new(RemoteSubmit::new(endpoint)?))
        }
        SubmissionMode::Simulated => Ok(Arc::new(SimulatedSubmit::new(config.simulated_delay()))),
    }
}
