//! Film and page reads built on the query catalogue.

use serde_json::{json, Value};
use studio_core::film::Film;
use studio_core::studio::StudioPage;

use crate::error::ContentError;
use crate::queries;
use crate::store::{fetch, params, ContentStore, QueryParams};

/// Pick the list query for an optional category filter.
///
/// A missing or blank category selects all films.
pub fn list_query(category: Option<&str>) -> (&'static str, QueryParams) {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => (
            queries::FILMS_BY_CATEGORY,
            params([("category", json!(category))]),
        ),
        None => (queries::ALL_FILMS, QueryParams::new()),
    }
}

/// Coerce a list result into an array.
///
/// Anything other than a JSON array becomes an empty list. The substitution
/// is logged so an upstream shape change stays visible.
pub fn into_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(
                kind = value_kind(&other),
                "Content store returned a non-array list result, treating as empty"
            );
            Vec::new()
        }
    }
}

/// List films as raw JSON objects, optionally filtered by category.
pub async fn list_film_values(
    store: &dyn ContentStore,
    category: Option<&str>,
) -> Result<Vec<Value>, ContentError> {
    let (query, params) = list_query(category);
    Ok(into_list(store.query(query, &params).await?))
}

/// List films as typed records.
///
/// Entries that do not decode as [`Film`] are skipped with a warning rather
/// than failing the whole list.
pub async fn list_films(
    store: &dyn ContentStore,
    category: Option<&str>,
) -> Result<Vec<Film>, ContentError> {
    Ok(decode_films(list_film_values(store, category).await?))
}

/// Decode film entries, skipping and logging any that do not match [`Film`].
fn decode_films(values: Vec<Value>) -> Vec<Film> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Film>(value) {
            Ok(film) => Some(film),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed film entry");
                None
            }
        })
        .collect()
}

/// Films for the carousel: flagged films first, all films as fallback.
///
/// Only the store round-trips happen here; capping and playability filtering
/// are applied by [`studio_core::film::carousel_slides`].
pub async fn featured_candidates(store: &dyn ContentStore) -> Result<Vec<Film>, ContentError> {
    let featured = decode_films(into_list(
        store
            .query(queries::FEATURED_FILMS, &QueryParams::new())
            .await?,
    ));

    if !featured.is_empty() {
        return Ok(featured);
    }
    list_films(store, None).await
}

/// Fetch a single film by slug.
pub async fn film_by_slug(
    store: &dyn ContentStore,
    slug: &str,
) -> Result<Option<Film>, ContentError> {
    fetch(store, queries::FILM_BY_SLUG, &params([("slug", json!(slug))])).await
}

/// Fetch the studio page document, if one exists.
pub async fn studio_page(store: &dyn ContentStore) -> Result<Option<StudioPage>, ContentError> {
    fetch(store, queries::STUDIO_PAGE, &QueryParams::new()).await
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
