//! Contact form page.

use axum::extract::State;
use maud::{html, Markup, PreEscaped};
use studio_core::contact::{BUDGET_RANGES, PROJECT_TYPES};

use super::layout::{page, Nav};
use crate::state::AppState;

/// Submits the form as JSON to `/api/contact` and reports the outcome inline.
const CONTACT_JS: &str = r#"
(function () {
  var form = document.getElementById('contact-form');
  var status = document.getElementById('form-status');
  if (!form) return;
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    var data = new FormData(form);
    var payload = {};
    data.forEach(function (value, key) { payload[key] = value; });
    var button = form.querySelector('button[type=submit]');
    button.disabled = true;
    status.className = 'form-status';
    status.textContent = 'Sending…';
    fetch('/api/contact', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    })
      .then(function (res) {
        return res.json().then(function (body) { return { ok: res.ok, body: body }; });
      })
      .then(function (result) {
        if (result.ok) {
          form.reset();
          status.className = 'form-status success';
          status.textContent = 'Thanks! We will be in touch soon.';
        } else {
          status.className = 'form-status error';
          status.textContent = result.body.error || 'Something went wrong.';
        }
      })
      .catch(function () {
        status.className = 'form-status error';
        status.textContent = 'Something went wrong. Please try again.';
      })
      .finally(function () { button.disabled = false; });
  });
})();
"#;

/// GET /contact
pub async fn contact_page(State(state): State<AppState>) -> Markup {
    page(
        &state.config.site_name,
        "Contact",
        Nav::Contact,
        false,
        render_form(),
    )
}

pub fn render_form() -> Markup {
    html! {
        section class="prose" {
            h1 { "Start a project" }
            p { "Tell us about your project and we will get back to you within two working days." }
        }
        form id="contact-form" class="contact-form" novalidate {
            label for="name" { "Name" }
            input id="name" name="name" type="text" autocomplete="name" required;

            label for="email" { "Email" }
            input id="email" name="email" type="email" autocomplete="email" required;

            label for="projectType" { "Project type" }
            select id="projectType" name="projectType" required {
                option value="" { "Select one" }
                @for kind in PROJECT_TYPES {
                    option value=(kind) { (kind) }
                }
            }

            label for="budget" { "Budget" }
            select id="budget" name="budget" required {
                option value="" { "Select one" }
                @for range in BUDGET_RANGES {
                    option value=(range) { (range) }
                }
            }

            label for="message" { "Message" }
            textarea id="message" name="message" rows="6" {}

            button type="submit" { "Send inquiry" }
            p id="form-status" class="form-status" role="status" {}
        }
        script { (PreEscaped(CONTACT_JS)) }
    }
}
