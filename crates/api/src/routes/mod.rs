pub mod contact;
pub mod films;
pub mod health;
pub mod pages;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /films                  list films, optionally by category
/// /films/{slug}           single film
/// /featured               carousel display list
/// /contact                contact form submission (POST)
/// *                       JSON 404
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(films::router())
        .merge(contact::router())
        .fallback(handlers::api_not_found)
}
