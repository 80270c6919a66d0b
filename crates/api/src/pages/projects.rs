//! Projects listing with category filter navigation.

use axum::extract::{Query, State};
use maud::{html, Markup};
use studio_content::films;
use studio_core::film::{category_label, Film, CATEGORIES};
use studio_core::streaming;

use super::layout::{page, Nav};
use crate::query::CategoryParams;
use crate::state::AppState;

/// GET /projects?category=
pub async fn projects_page(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Markup {
    let category = params.category();
    let films = films::list_films(state.content.as_ref(), category)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, ?category, "Failed to load projects");
            Vec::new()
        });

    let title = match category {
        Some(tag) => category_label(tag).to_string(),
        None => "Projects".to_string(),
    };

    page(
        &state.config.site_name,
        &title,
        Nav::Projects,
        false,
        html! {
            h1 class="visually-hidden" { (title) }
            (filters(category))
            @if films.is_empty() {
                p class="empty" { "No projects found" }
            } @else {
                div class="grid" {
                    @for film in &films {
                        (card(film))
                    }
                }
            }
        },
    )
}

fn filters(active: Option<&str>) -> Markup {
    html! {
        nav class="filters" aria-label="Categories" {
            a href="/projects" class=[active.is_none().then_some("active")] { "All" }
            @for (tag, label) in CATEGORIES {
                a href={ "/projects?category=" (tag) }
                    class=[(active == Some(*tag)).then_some("active")] { (label) }
            }
        }
    }
}

/// Thumbnail for a card: first still, else the preview poster.
fn thumbnail(film: &Film) -> Option<(String, String)> {
    if let Some(still) = film.stills.first() {
        let alt = still.alt.clone().unwrap_or_else(|| film.title.clone());
        return Some((still.url.clone(), alt));
    }
    film.preview_playback_id()
        .map(|id| (streaming::poster_url(id), film.title.clone()))
}

fn card(film: &Film) -> Markup {
    html! {
        a class="card" href={ "/projects/" (film.slug) } {
            @if let Some((src, alt)) = thumbnail(film) {
                img src=(src) alt=(alt) loading="lazy";
            }
            h3 { (film.title) }
            p class="meta" {
                @if let Some(label) = film.category_label() { (label) }
                @if let Some(year) = film.year { " · " (year) }
            }
        }
    }
}
