use async_trait::async_trait;
use serde_json::Value;

use crate::error::MailError;
use crate::message::OutgoingEmail;

/// Sends a composed email and returns the provider's response.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, MailError>;
}

/// Mailer used when no transport is configured. Every send fails with
/// [`MailError::NotConfigured`].
#[derive(Debug, Default)]
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, MailError> {
        tracing::warn!(subject = %email.subject, "Dropping email, no mail transport configured");
        Err(MailError::NotConfigured)
    }
}
