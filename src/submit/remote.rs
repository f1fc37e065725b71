//! HTTP submission to a JSON endpoint

use super::{SubmissionOutcome, SubmissionStrategy};
use crate::state::FormSnapshot;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures that never reached a usable response
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Posts the snapshot as a JSON object to a fixed endpoint
pub struct RemoteSubmit {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSubmit {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, snapshot: &FormSnapshot) -> Result<(StatusCode, Value), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(snapshot)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let json = serde_json::from_slice(&body)?;
        Ok((status, json))
    }
}

#[async_trait]
impl SubmissionStrategy for RemoteSubmit {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn submit(&self, snapshot: FormSnapshot) -> SubmissionOutcome {
        match self.post(&snapshot).await {
            Ok((status, _)) if status == StatusCode::OK => SubmissionOutcome::Success,
            Ok((status, body)) => {
                let reason = body
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("endpoint responded with {status}"));
                tracing::warn!(%status, %reason, "contact form submission rejected");
                SubmissionOutcome::Failure(reason)
            }
            Err(err) => {
                tracing::warn!(error = %err, endpoint = %self.endpoint(), "contact form submission failed");
                SubmissionOutcome::NetworkError(err.to_string())
            }
        }
    }
}
