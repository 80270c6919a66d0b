//! Project detail page.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};
use studio_content::films;
use studio_core::film::{is_valid_slug, Film};
use studio_core::streaming;

use super::layout::{page, Nav};
use super::player;
use super::{ErrorPage, PageError};
use crate::state::AppState;

/// GET /projects/{slug}
pub async fn project_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    if !is_valid_slug(&slug) {
        return ErrorPage::new(&state, PageError::NotFound(slug)).into_response();
    }

    match films::film_by_slug(state.content.as_ref(), &slug).await {
        Ok(Some(film)) => page(
            &state.config.site_name,
            &film.title,
            Nav::Projects,
            false,
            render_film(&film),
        )
        .into_response(),
        Ok(None) => ErrorPage::new(&state, PageError::NotFound(slug)).into_response(),
        Err(e) => ErrorPage::new(&state, PageError::Unavailable(e.to_string())).into_response(),
    }
}

pub fn render_film(film: &Film) -> Markup {
    let video = film.full_playback_id().or_else(|| film.preview_playback_id());

    html! {
        @if let Some(id) = video {
            section class="project-hero" {
                video
                    controls
                    playsinline
                    preload="metadata"
                    poster=(streaming::poster_url(id))
                    src=(streaming::manifest_url(id))
                    data-src=(streaming::manifest_url(id))
                    data-playback-id=(id)
                    data-autoattach {}
            }
            (player::scripts())
        }
        header class="project-head" {
            h1 { (film.title) }
            div class="project-meta" {
                @if let Some(label) = film.category_label() { span { (label) } }
                @if let Some(year) = film.year { span { (year) } }
                @if let Some(client) = &film.client { span { "Client: " (client) } }
            }
        }
        @if let Some(description) = &film.description {
            p class="project-description" { (description) }
        }
        @if !film.stills.is_empty() {
            div class="stills" {
                @for still in &film.stills {
                    img src=(still.url) alt=(still.alt.as_deref().unwrap_or(&film.title)) loading="lazy";
                }
            }
        }
        p { a href="/projects" { "← All projects" } }
    }
}
