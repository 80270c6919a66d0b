//! Background work detached from the request/response cycle.
//!
//! Tasks run on the state's [`TaskTracker`](tokio_util::task::TaskTracker)
//! so graceful shutdown can wait for them. Their failures are reported to
//! tracing only; they never reach the client.

use std::sync::Arc;

use studio_core::contact::ContactSubmission;
use studio_mail::contact::acknowledgment_email;

use crate::state::AppState;

/// Send the acknowledgment email to a submitter without blocking the
/// response.
pub fn spawn_acknowledgment(state: &AppState, submission: &ContactSubmission) {
    let mailer = Arc::clone(&state.mailer);
    let email = acknowledgment_email(&state.mail_addresses, submission);

    state.background.spawn(async move {
        match mailer.send(&email).await {
            Ok(_) => {
                tracing::info!(to = ?email.to, "Acknowledgment email sent");
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    to = ?email.to,
                    "Failed to send acknowledgment email"
                );
            }
        }
    });
}
