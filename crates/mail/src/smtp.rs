//! Mail delivery via SMTP.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport. Configuration is
//! loaded from environment variables; if `SMTP_HOST` is not set,
//! [`SmtpConfig::from_env`] returns `None`.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde_json::{json, Value};

use crate::error::MailError;
use crate::mailer::Mailer;
use crate::message::OutgoingEmail;

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Required | Default |
    /// |-----------------|----------|---------|
    /// | `SMTP_HOST`     | yes      | none    |
    /// | `SMTP_PORT`     | no       | `587`   |
    /// | `SMTP_USER`     | no       | none    |
    /// | `SMTP_PASSWORD` | no       | none    |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let smtp_host = var("SMTP_HOST").filter(|h| !h.is_empty())?;
        Some(Self {
            smtp_host,
            smtp_port: var("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: var("SMTP_USER"),
            smtp_password: var("SMTP_PASSWORD"),
        })
    }
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

/// Assemble a MIME message with plain-text and HTML alternatives.
pub fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(email.from.parse::<Mailbox>()?)
        .subject(email.subject.clone());

    for to in &email.to {
        builder = builder.to(to.parse::<Mailbox>()?);
    }
    for cc in &email.cc {
        builder = builder.cc(cc.parse::<Mailbox>()?);
    }
    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(reply_to.parse::<Mailbox>()?);
    }

    builder
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, MailError> {
        let message = build_message(email)?;
        let response = self.transport.send(message).await?;

        tracing::info!(to = ?email.to, subject = %email.subject, "Email sent via SMTP");
        Ok(json!({
            "code": response.code().to_string(),
            "message": response.message().map(str::to_string).collect::<Vec<String>>(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "Studio <noreply@studio.test>".into(),
            to: vec!["hello@studio.test".into()],
            cc: vec!["Jan <jan@example.com>".into()],
            reply_to: Some("jan@example.com".into()),
            subject: "New inquiry".into(),
            html: "<p>Hi</p>".into(),
            text: "Hi".into(),
        }
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn config_requires_smtp_host() {
        assert!(SmtpConfig::from_lookup(lookup(&[])).is_none());
        assert!(SmtpConfig::from_lookup(lookup(&[("SMTP_HOST", "")])).is_none());
    }

    #[test]
    fn config_defaults_port_and_reads_credentials() {
        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "not-a-port"),
            ("SMTP_USER", "studio"),
            ("SMTP_PASSWORD", "hunter2"),
        ]))
        .unwrap();
        assert_eq!(config.smtp_host, "smtp.example.com");
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.smtp_user.as_deref(), Some("studio"));
        assert_eq!(config.smtp_password.as_deref(), Some("hunter2"));
    }

    #[tokio::test]
    async fn mailer_builds_from_explicit_config() {
        let config = SmtpConfig {
            smtp_host: "smtp.example.com".into(),
            smtp_port: 2525,
            smtp_user: None,
            smtp_password: None,
        };
        assert!(SmtpMailer::new(&config).is_ok());
    }

    #[test]
    fn builds_message_with_all_headers() {
        let message = build_message(&email()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: hello@studio.test"));
        assert!(raw.contains("Cc: "));
        assert!(raw.contains("<jan@example.com>"));
        assert!(raw.contains("Reply-To: jan@example.com"));
        assert!(raw.contains("Subject: New inquiry"));
    }

    #[test]
    fn invalid_recipient_is_an_address_error() {
        let email = OutgoingEmail {
            to: vec!["not-an-email".into()],
            ..email()
        };
        assert_matches!(build_message(&email), Err(MailError::Address(_)));
    }
}
