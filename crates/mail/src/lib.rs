//! Outbound mail for the studio site.
//!
//! - [`Mailer`]: the send seam handlers depend on.
//! - [`ApiMailer`] / [`SmtpMailer`]: HTTP mail API and SMTP transports.
//! - [`contact`]: composition of the contact-form emails.
//! - [`MailConfig`]: transport and address selection from the environment.

pub mod api;
pub mod config;
pub mod contact;
pub mod error;
pub mod mailer;
pub mod message;
pub mod smtp;

pub use api::ApiMailer;
pub use config::{MailConfig, MailTransport};
pub use contact::ContactAddresses;
pub use error::MailError;
pub use mailer::{DisabledMailer, Mailer};
pub use message::OutgoingEmail;
pub use smtp::{SmtpConfig, SmtpMailer};
