mod email;
mod simulated;

use std::fmt::{Debug, Formatter};

pub use email::EmailTransport;
pub use simulated::SimulatedTransport;

use crate::domain::ContactSubmission;
use crate::error_handling::error_chain_fmt;

/// Delivers a validated contact submission somewhere a human will read it.
///
/// Implementations are called exactly once per submission; callers neither
/// retry nor impose a timeout of their own.
#[async_trait::async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), TransportError>;
}

#[derive(thiserror::Error)]
pub enum TransportError {
    #[error("Failed to deliver the contact submission to the mail service")]
    MailService(#[from] reqwest::Error),
    #[error("Simulated delivery failure")]
    Simulated,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
