//! Shared page shell and the site stylesheet.

use axum::http::header;
use axum::response::IntoResponse;
use maud::{html, Markup, DOCTYPE};

/// Site stylesheet, served from `/static/site.css`.
///
/// Dark, full-bleed layout. The carousel stacks its slides and shows the
/// active one; blending between slides is a client concern.
pub const SITE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#0b0b0b;--fg:#f2f2f2;--fg2:#a0a0a0;--accent:#e8ff5a;--gap:1.5rem}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:var(--bg);color:var(--fg);line-height:1.6;min-height:100vh;display:flex;flex-direction:column}
a{color:inherit;text-decoration:none}
a:hover{color:var(--accent)}
img,video{max-width:100%;display:block}
.visually-hidden{position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap}

.site-header{position:fixed;top:0;left:0;right:0;z-index:10;display:flex;justify-content:space-between;align-items:center;padding:1.25rem var(--gap);mix-blend-mode:difference}
.site-logo{font-weight:700;letter-spacing:.08em;text-transform:uppercase}
.site-nav{display:flex;gap:1.5rem;font-size:.95rem}
.site-nav a.active{color:var(--accent)}
main{flex:1;padding:6rem var(--gap) 3rem}
main.full-bleed{padding:0}
.site-footer{padding:2rem var(--gap);color:var(--fg2);font-size:.85rem;display:flex;justify-content:space-between}

.carousel{position:relative;height:100vh;overflow:hidden}
.carousel-slide{position:absolute;inset:0;opacity:0;transition:opacity 1.2s ease}
.carousel-slide.active{opacity:1}
.carousel-slide video{width:100%;height:100%;object-fit:cover}
.carousel-caption{position:absolute;left:var(--gap);bottom:4rem}
.carousel-caption h2{font-size:clamp(2rem,6vw,5rem);line-height:1;font-weight:700}
.carousel-caption span{color:var(--fg2);text-transform:uppercase;letter-spacing:.1em;font-size:.8rem}
.carousel-dots{position:absolute;right:var(--gap);bottom:4rem;display:flex;flex-direction:column;gap:.5rem}
.carousel-dots button{width:10px;height:10px;border-radius:50%;border:1px solid var(--fg);background:none;cursor:pointer}
.carousel-dots button.active{background:var(--fg)}

.filters{display:flex;flex-wrap:wrap;gap:1rem;margin-bottom:2rem;font-size:.9rem;text-transform:uppercase;letter-spacing:.08em}
.filters a{color:var(--fg2)}
.filters a.active{color:var(--accent)}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(320px,1fr));gap:var(--gap)}
.card img{aspect-ratio:16/9;object-fit:cover;width:100%;background:#1a1a1a}
.card h3{margin-top:.6rem;font-size:1.15rem}
.card .meta{color:var(--fg2);font-size:.85rem}

.project-hero video{width:100%;aspect-ratio:16/9;background:#000}
.project-head{margin:2rem 0 1rem}
.project-head h1{font-size:clamp(2rem,5vw,4rem);line-height:1.05}
.project-meta{display:flex;gap:1.5rem;color:var(--fg2);font-size:.9rem;margin-top:.5rem}
.project-description{max-width:46rem;white-space:pre-wrap;margin:1.5rem 0}
.stills{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:.75rem;margin-top:2rem}

.intro{font-size:1.25rem}
.prose{max-width:46rem}
.prose h1{font-size:clamp(2rem,5vw,3.5rem);margin-bottom:1rem}
.prose p{margin-bottom:1rem;color:var(--fg2)}
.team{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:var(--gap);margin:2rem 0}
.team .role{color:var(--fg2);font-size:.85rem}
.clients{display:flex;flex-wrap:wrap;gap:.5rem 1.5rem;color:var(--fg2)}

.contact-form{max-width:36rem;display:grid;gap:1rem}
.contact-form label{display:grid;gap:.3rem;font-size:.85rem;color:var(--fg2)}
.contact-form input,.contact-form select,.contact-form textarea{font:inherit;color:var(--fg);background:#151515;border:1px solid #2a2a2a;border-radius:4px;padding:.65rem .75rem}
.contact-form button{font:inherit;justify-self:start;padding:.7rem 1.6rem;background:var(--accent);color:#000;border:0;border-radius:4px;cursor:pointer}
.contact-form button[disabled]{opacity:.5;cursor:wait}
.form-status{min-height:1.5rem;font-size:.9rem}
.form-status.error{color:#ff6b6b}
.form-status.success{color:var(--accent)}

.empty{color:var(--fg2);padding:4rem 0;text-align:center}
.error-page{max-width:36rem;margin:8rem auto;text-align:center}
.error-page h1{font-size:3rem;margin-bottom:1rem}
.error-page p{color:var(--fg2);margin-bottom:2rem}
"#;

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Projects,
    Studio,
    Contact,
    None,
}

const NAV_LINKS: &[(Nav, &str, &str)] = &[
    (Nav::Projects, "/projects", "Projects"),
    (Nav::Studio, "/studio", "Studio"),
    (Nav::Contact, "/contact", "Contact"),
];

/// GET /static/site.css
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        SITE_CSS,
    )
}

/// Wrap `body` in the full page shell.
///
/// `full_bleed` drops the main padding (used by the home carousel).
pub fn page(site_name: &str, title: &str, active: Nav, full_bleed: bool, body: Markup) -> Markup {
    let full_title = if active == Nav::Home {
        site_name.to_string()
    } else {
        format!("{title} | {site_name}")
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (full_title) }
                meta property="og:title" content=(full_title);
                meta property="og:type" content="website";
                link rel="stylesheet" href="/static/site.css";
            }
            body {
                header class="site-header" {
                    a class="site-logo" href="/" { (site_name) }
                    nav class="site-nav" {
                        @for (nav, href, label) in NAV_LINKS {
                            a href=(href) class=[(*nav == active).then_some("active")] { (label) }
                        }
                    }
                }
                main class=[full_bleed.then_some("full-bleed")] {
                    (body)
                }
                footer class="site-footer" {
                    span { "© " (site_name) }
                    a href="/contact" { "Start a project" }
                }
            }
        }
    }
}
