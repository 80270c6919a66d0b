//! Home page with the featured-project carousel.

use axum::extract::State;
use maud::{html, Markup, PreEscaped};
use studio_content::films;
use studio_core::carousel::{BLEND_DURATION, COOLDOWN, SCROLL_THRESHOLD, SWIPE_THRESHOLD};
use studio_core::film::{carousel_slides, CarouselSlide};

use super::layout::{page, Nav};
use super::player;
use crate::state::AppState;

/// Carousel navigation: one transition at a time, locked for the blend plus
/// the cooldown read from the section's `data-*` attributes. Mirrors
/// `studio_core::carousel`.
const CAROUSEL_JS: &str = r#"
(function () {
  var root = document.querySelector('.carousel[data-count]');
  if (!root) return;
  var slides = root.querySelectorAll('.carousel-slide');
  var dots = root.querySelectorAll('.carousel-dots button');
  var count = slides.length;
  var blendMs = Number(root.dataset.blendMs) || 0;
  var cooldownMs = Number(root.dataset.cooldownMs) || 0;
  var scrollThreshold = Number(root.dataset.scrollThreshold) || 0;
  var swipeThreshold = Number(root.dataset.swipeThreshold) || 0;
  var index = 0;
  var lockedUntil = 0;
  var retry = {};

  function videoAt(i) { return slides[i].querySelector('video'); }

  function play(i) {
    var video = videoAt(i);
    if (retry[i]) {
      window.studioPlayer.reset(video);
      delete retry[i];
    }
    window.studioPlayer.attach(video);
    var started = video.play();
    if (started && started.catch) {
      started.catch(function () { retry[i] = true; });
    }
  }

  function go(target) {
    var now = Date.now();
    var next = ((target % count) + count) % count;
    if (now < lockedUntil || next === index) return;
    lockedUntil = now + blendMs + cooldownMs;
    var previous = index;
    index = next;
    slides[previous].classList.remove('active');
    slides[index].classList.add('active');
    if (dots[previous]) dots[previous].classList.remove('active');
    if (dots[index]) dots[index].classList.add('active');
    play(index);
    setTimeout(function () { videoAt(previous).pause(); }, blendMs);
  }

  function step(direction) { go(index + direction); }

  root.addEventListener('wheel', function (event) {
    if (Math.abs(event.deltaY) < scrollThreshold) return;
    event.preventDefault();
    step(event.deltaY > 0 ? 1 : -1);
  }, { passive: false });

  var touchStartY = null;
  root.addEventListener('touchstart', function (event) {
    touchStartY = event.touches[0].clientY;
  }, { passive: true });
  root.addEventListener('touchend', function (event) {
    if (touchStartY === null) return;
    var delta = touchStartY - event.changedTouches[0].clientY;
    touchStartY = null;
    if (Math.abs(delta) < swipeThreshold) return;
    step(delta > 0 ? 1 : -1);
  });

  dots.forEach(function (dot) {
    dot.addEventListener('click', function () { go(Number(dot.dataset.index)); });
  });

  slides.forEach(function (slide, i) {
    var video = videoAt(i);
    video.addEventListener('ended', function () { if (i === index) step(1); });
    video.addEventListener('error', function () { retry[i] = true; });
  });

  play(0);
})();
"#;

/// GET /
pub async fn home_page(State(state): State<AppState>) -> Markup {
    let slides = match films::featured_candidates(state.content.as_ref()).await {
        Ok(films) => carousel_slides(&films),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load featured films");
            Vec::new()
        }
    };

    page(
        &state.config.site_name,
        "Home",
        Nav::Home,
        true,
        render_carousel(&slides),
    )
}

/// Render the carousel markup.
///
/// Timing and gesture thresholds are exposed as `data-*` attributes so the
/// client drives the same navigation lock as `studio_core::carousel`.
pub fn render_carousel(slides: &[CarouselSlide]) -> Markup {
    if slides.is_empty() {
        return html! {
            section class="carousel" {
                p class="empty" { "New work coming soon." }
            }
        };
    }

    html! {
        section
            class="carousel"
            data-count=(slides.len())
            data-blend-ms=(BLEND_DURATION.as_millis())
            data-cooldown-ms=(COOLDOWN.as_millis())
            data-scroll-threshold=(SCROLL_THRESHOLD)
            data-swipe-threshold=(SWIPE_THRESHOLD)
        {
            @for slide in slides {
                figure
                    class=(if slide.index == 0 { "carousel-slide active" } else { "carousel-slide" })
                    data-index=(slide.index)
                {
                    video
                        muted
                        playsinline
                        preload=(if slide.index == 0 { "auto" } else { "none" })
                        poster=(slide.poster_url)
                        data-src=(slide.manifest_url)
                        data-playback-id=(slide.playback_id) {}
                    figcaption class="carousel-caption" {
                        @if let Some(category) = &slide.category {
                            span { (studio_core::film::category_label(category)) }
                        }
                        a href={ "/projects/" (slide.slug) } {
                            h2 { (slide.title) }
                        }
                    }
                }
            }
            nav class="carousel-dots" aria-label="Featured projects" {
                @for slide in slides {
                    button
                        type="button"
                        class=[(slide.index == 0).then_some("active")]
                        data-index=(slide.index)
                        aria-label={ "Show " (slide.title) } {}
                }
            }
        }
        (player::scripts())
        script { (PreEscaped(CAROUSEL_JS)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(index: usize) -> CarouselSlide {
        CarouselSlide {
            index,
            title: format!("Film {index}"),
            slug: format!("film-{index}"),
            category: Some("documentary".into()),
            playback_id: format!("pb{index}"),
            manifest_url: format!("https://stream.mux.com/pb{index}.m3u8"),
            poster_url: format!("https://image.mux.com/pb{index}/thumbnail.jpg"),
        }
    }

    #[test]
    fn renders_one_figure_per_slide_with_first_active() {
        let html = render_carousel(&[slide(0), slide(1)]).into_string();
        assert_eq!(html.matches("<figure").count(), 2);
        assert!(html.contains(r#"class="carousel-slide active" data-index="0""#));
        assert!(html.contains(r#"data-src="https://stream.mux.com/pb1.m3u8""#));
        assert!(html.contains(r#"href="/projects/film-1""#));
        assert!(html.contains("Documentary"));
    }

    #[test]
    fn slides_ship_with_player_and_navigation_scripts() {
        let html = render_carousel(&[slide(0), slide(1)]).into_string();
        assert!(html.contains("window.studioPlayer"));
        assert!(html.contains("dataset.blendMs"));
        assert!(html.contains(r#"data-blend-ms="1200""#));
        assert!(html.contains(r#"data-cooldown-ms="400""#));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let html = render_carousel(&[]).into_string();
        assert!(html.contains("New work coming soon."));
        assert!(!html.contains("<video"));
        assert!(!html.contains("<script"));
    }
}
