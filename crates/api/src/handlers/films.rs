//! Handlers for the `/films` and `/featured` resources.
//!
//! Every request reads straight from the content store; there is no cache.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;
use studio_content::films;
use studio_core::error::CoreError;
use studio_core::film::{carousel_slides, is_valid_slug, CarouselSlide, Film};

use crate::error::{AppError, AppResult};
use crate::query::CategoryParams;
use crate::state::AppState;

/// GET /api/films?category=
///
/// Always answers with a JSON array. A non-array store result is returned
/// as `[]`.
pub async fn list_films(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<Vec<Value>>> {
    let items = films::list_film_values(state.content.as_ref(), params.category()).await?;
    Ok(Json(items))
}

/// GET /api/films/{slug}
pub async fn get_film(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Film>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Film",
            slug: slug.clone(),
        })
    };

    if !is_valid_slug(&slug) {
        return Err(not_found());
    }

    films::film_by_slug(state.content.as_ref(), &slug)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// GET /api/featured
///
/// The carousel display list: at most four slides, each with a playable
/// preview.
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<Vec<CarouselSlide>>> {
    let candidates = films::featured_candidates(state.content.as_ref()).await?;
    Ok(Json(carousel_slides(&candidates)))
}
