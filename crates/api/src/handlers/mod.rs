pub mod contact;
pub mod films;

use crate::error::AppError;

/// Fallback for unmatched `/api` paths: JSON 404 instead of the HTML page.
pub async fn api_not_found() -> AppError {
    AppError::NotFound
}
