//! Handler for contact form submissions.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use studio_core::contact::ContactRequest;
use studio_mail::contact::notification_email;

use crate::background;
use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/contact
///
/// 1. Parse and validate the payload (400 on missing required fields).
/// 2. Send the studio notification (500 if it fails; nothing else is sent).
/// 3. Queue the submitter acknowledgment in the background and respond with
///    the provider's response for the notification.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<SuccessResponse<Value>>> {
    let request: ContactRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::InternalError(format!("Unreadable contact payload: {e}")))?;

    let submission = request.validate()?;

    let notification = notification_email(&state.mail_addresses, &submission, chrono::Utc::now());
    let data = state.mailer.send(&notification).await?;

    tracing::info!(
        project_type = %submission.project_type,
        budget = %submission.budget,
        "Contact notification sent"
    );

    background::spawn_acknowledgment(&state, &submission);

    Ok(Json(SuccessResponse::new(data)))
}
