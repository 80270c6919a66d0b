use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use studio_content::ContentError;
use studio_core::error::CoreError;
use studio_mail::MailError;

/// Body message for failed mail sends.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send email";

/// Body message for unknown API routes.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Body message for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type for JSON handlers.
///
/// Implements [`IntoResponse`] to produce `{"error": <message>}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `studio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The content store could not be queried.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// An outbound email could not be sent.
    #[error(transparent)]
    Mail(#[from] MailError),

    /// No API route matched the request path.
    #[error("Route not found")]
    NotFound,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
            },

            // --- Upstream errors ---
            AppError::Content(err) => {
                tracing::error!(error = %err, "Content store error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Mail(err) => {
                tracing::error!(error = %err, "Mail send failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SEND_FAILED_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
