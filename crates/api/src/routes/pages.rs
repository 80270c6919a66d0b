//! Server-rendered pages and static assets.
//!
//! ```text
//! GET  /                   home (featured carousel)
//! GET  /studio             about page
//! GET  /projects           listing (?category=)
//! GET  /projects/{slug}    detail
//! GET  /contact            contact form
//! GET  /static/site.css    stylesheet
//! ```

use axum::routing::get;
use axum::Router;

use crate::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home::home_page))
        .route("/studio", get(pages::studio::studio_page))
        .route("/projects", get(pages::projects::projects_page))
        .route("/projects/{slug}", get(pages::project::project_page))
        .route("/contact", get(pages::contact::contact_page))
        .route("/static/site.css", get(pages::layout::stylesheet))
}
