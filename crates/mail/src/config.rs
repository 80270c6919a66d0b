use std::sync::Arc;

use crate::api::{ApiMailer, DEFAULT_API_URL};
use crate::contact::ContactAddresses;
use crate::error::MailError;
use crate::mailer::{DisabledMailer, Mailer};
use crate::smtp::{SmtpConfig, SmtpMailer};

/// Default `From` address when `MAIL_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "Studio <noreply@studio.local>";

/// Default notification inbox when `STUDIO_INBOX` is not set.
const DEFAULT_STUDIO_INBOX: &str = "hello@studio.local";

/// How outbound mail leaves the process.
#[derive(Debug, Clone)]
pub enum MailTransport {
    /// HTTP mail API authorised by an API key.
    Api { api_url: String, api_key: String },
    /// SMTP relay.
    Smtp(SmtpConfig),
    /// Nothing configured; sends fail.
    Disabled,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub transport: MailTransport,
    pub addresses: ContactAddresses,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// `RESEND_API_KEY` selects the HTTP API transport; otherwise `SMTP_HOST`
    /// selects SMTP; otherwise mail is disabled.
    ///
    /// | Variable         | Default                          |
    /// |------------------|----------------------------------|
    /// | `RESEND_API_KEY` | none                             |
    /// | `MAIL_API_URL`   | `https://api.resend.com`         |
    /// | `MAIL_FROM`      | `Studio <noreply@studio.local>`  |
    /// | `STUDIO_INBOX`   | `hello@studio.local`             |
    pub fn from_env(studio_name: &str) -> Self {
        let transport = match std::env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()) {
            Some(api_key) => MailTransport::Api {
                api_url: std::env::var("MAIL_API_URL")
                    .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
                api_key,
            },
            None => SmtpConfig::from_env()
                .map(MailTransport::Smtp)
                .unwrap_or(MailTransport::Disabled),
        };

        Self {
            transport,
            addresses: ContactAddresses {
                from: std::env::var("MAIL_FROM")
                    .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
                studio_inbox: std::env::var("STUDIO_INBOX")
                    .unwrap_or_else(|_| DEFAULT_STUDIO_INBOX.to_string()),
                studio_name: studio_name.to_string(),
            },
        }
    }

    /// Construct the mailer for the configured transport.
    pub fn build_mailer(&self) -> Result<Arc<dyn Mailer>, MailError> {
        let mailer: Arc<dyn Mailer> = match &self.transport {
            MailTransport::Api { api_url, api_key } => {
                Arc::new(ApiMailer::new(api_url.clone(), api_key.clone())?)
            }
            MailTransport::Smtp(smtp) => Arc::new(SmtpMailer::new(smtp)?),
            MailTransport::Disabled => {
                tracing::warn!("No mail transport configured, contact emails will fail");
                Arc::new(DisabledMailer)
            }
        };
        Ok(mailer)
    }

    pub fn transport_name(&self) -> &'static str {
        match self.transport {
            MailTransport::Api { .. } => "api",
            MailTransport::Smtp(_) => "smtp",
            MailTransport::Disabled => "disabled",
        }
    }
}
