//! Route definitions for film listings.
//!
//! ```text
//! GET  /films              list_films (?category=)
//! GET  /films/{slug}       get_film
//! GET  /featured           list_featured
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/films", get(films::list_films))
        .route("/films/{slug}", get(films::get_film))
        .route("/featured", get(films::list_featured))
}
