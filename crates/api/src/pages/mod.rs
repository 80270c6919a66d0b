//! Server-rendered HTML pages.
//!
//! Pages read content at request time and degrade to empty states when the
//! content store fails; store errors are logged, never surfaced as a crash.
//! All rendering uses maud, which escapes every dynamic value.

pub mod contact;
pub mod home;
pub mod layout;
pub mod player;
pub mod project;
pub mod projects;
pub mod studio;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::html;

use crate::state::AppState;
use layout::{page, Nav};

/// Errors rendered as HTML error pages.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The requested page or project does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Content could not be loaded; the visitor should retry later.
    #[error("content unavailable: {0}")]
    Unavailable(String),
}

/// Error page, carrying the site name for the page shell.
pub struct ErrorPage {
    pub site_name: String,
    pub error: PageError,
}

impl ErrorPage {
    pub fn new(state: &AppState, error: PageError) -> Self {
        Self {
            site_name: state.config.site_name.clone(),
            error,
        }
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self.error {
            PageError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "Not found",
                "The page you were looking for does not exist.",
            ),
            PageError::Unavailable(detail) => {
                tracing::error!(error = %detail, "Page content unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Temporarily unavailable",
                    "We could not load this page right now. Please try again in a moment.",
                )
            }
        };

        let markup = page(
            &self.site_name,
            title,
            Nav::None,
            false,
            html! {
                section class="error-page" {
                    h1 { (title) }
                    p { (message) }
                    a href="/" { "Back to home" }
                }
            },
        );

        (status, markup).into_response()
    }
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<AppState>) -> ErrorPage {
    ErrorPage::new(&state, PageError::NotFound("route".into()))
}
