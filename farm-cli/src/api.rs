//! Submission boundary.
//!
//! There is no real backend yet; [`MockApi`] stands in for it with a fixed
//! delay and a log line, so the rest of the flow (submit gating, store
//! clearing) behaves exactly as it will against a live service.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use farm_core::models::Draft;
use farm_core::{SubmissionClient, SubmitError};

/// Pretend endpoint: waits, logs the payload, accepts.
pub struct MockApi {
    delay: Duration,
}

impl MockApi {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockApi {
    fn default() -> Self {
        // Simulated round-trip latency.
        Self::with_delay(Duration::from_secs(2))
    }
}

#[async_trait]
impl SubmissionClient for MockApi {
    async fn submit(&self, draft: &Draft) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;

        match serde_json::to_string(draft) {
            Ok(body) => {
                info!(bytes = body.len(), "draft accepted by mock endpoint");
                debug!(%body, "submitted draft");
            }
            Err(error) => {
                // A Draft always serializes; keep the mock permissive anyway.
                info!(%error, "draft accepted by mock endpoint");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_api_always_accepts() {
        let api = MockApi::with_delay(Duration::ZERO);
        let result = api.submit(&Draft::default()).await;
        assert!(result.is_ok());
    }
}
