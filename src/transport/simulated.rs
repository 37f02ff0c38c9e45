use std::time::Duration;

use rand::Rng;

use crate::domain::ContactSubmission;
use crate::transport::{SubmissionTransport, TransportError};

/// Stand-in transport for local development: waits, logs the submission and
/// fails with a configurable probability.
pub struct SimulatedTransport {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedTransport {
    /// `failure_rate` is clamped to `0.0..=1.0`.
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            failure_rate,
        }
    }
}

#[async_trait::async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(?submission, "Form submitted");

        let failed = rand::thread_rng().gen_bool(self.failure_rate);
        if failed {
            Err(TransportError::Simulated)
        } else {
            Ok(())
        }
    }
}
