//! Studio/about page.

use axum::extract::State;
use maud::{html, Markup};
use studio_content::films;
use studio_core::studio::StudioPage;

use super::layout::{page, Nav};
use crate::state::AppState;

/// GET /studio
///
/// Falls back to the static copy when the store has no studio document or
/// cannot be reached.
pub async fn studio_page(State(state): State<AppState>) -> Markup {
    let content = match films::studio_page(state.content.as_ref()).await {
        Ok(Some(content)) => content,
        Ok(None) => StudioPage::fallback(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load studio page");
            StudioPage::fallback()
        }
    };

    page(
        &state.config.site_name,
        &content.title,
        Nav::Studio,
        false,
        render(&content),
    )
}

fn render(content: &StudioPage) -> Markup {
    html! {
        article class="prose" {
            h1 { (content.title) }
            @if let Some(intro) = &content.intro {
                p class="intro" { (intro) }
            }
            @for paragraph in content.paragraphs() {
                p { (paragraph) }
            }
        }
        @if !content.team().is_empty() {
            section class="team" {
                @for member in content.team() {
                    div {
                        @if let Some(image) = &member.image {
                            img src=(image) alt=(member.name) loading="lazy";
                        }
                        h3 { (member.name) }
                        @if let Some(role) = &member.role {
                            p class="role" { (role) }
                        }
                    }
                }
            }
        }
        @if !content.clients().is_empty() {
            section {
                h2 { "Clients" }
                div class="clients" {
                    @for client in content.clients() {
                        span { (client) }
                    }
                }
            }
        }
    }
}
