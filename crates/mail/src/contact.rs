//! Emails sent for a contact form submission.
//!
//! Two messages per submission: a notification to the studio inbox (CC and
//! reply-to the submitter) and an acknowledgment to the submitter. HTML
//! bodies are rendered with maud, which escapes every submitted value.

use chrono::{DateTime, Utc};
use maud::{html, Markup, DOCTYPE};
use studio_core::contact::ContactSubmission;

use crate::message::OutgoingEmail;

/// Sender and recipient addresses for contact mail.
#[derive(Debug, Clone)]
pub struct ContactAddresses {
    /// `From` address, e.g. `Studio <noreply@studio.example>`.
    pub from: String,
    /// Inbox that receives notifications.
    pub studio_inbox: String,
    /// Studio name used in subjects and signatures.
    pub studio_name: String,
}

/// Notification to the studio inbox.
pub fn notification_email(
    addresses: &ContactAddresses,
    submission: &ContactSubmission,
    received_at: DateTime<Utc>,
) -> OutgoingEmail {
    let subject = format!(
        "New inquiry: {} from {}",
        submission.project_type, submission.name
    );
    let received = received_at.format("%Y-%m-%d %H:%M UTC").to_string();
    let message = submission.message.as_deref().unwrap_or("(no message)");

    let body = html! {
        h2 { "New contact form submission" }
        table cellpadding="6" {
            tr { th align="left" { "Name" } td { (submission.name) } }
            tr { th align="left" { "Email" } td { a href={ "mailto:" (submission.email) } { (submission.email) } } }
            tr { th align="left" { "Project type" } td { (submission.project_type) } }
            tr { th align="left" { "Budget" } td { (submission.budget) } }
            tr { th align="left" { "Received" } td { (received) } }
        }
        h3 { "Message" }
        p style="white-space:pre-wrap" { (message) }
    };

    let text = format!(
        "New contact form submission\n\n\
         Name: {}\nEmail: {}\nProject type: {}\nBudget: {}\nReceived: {}\n\n\
         Message:\n{}\n",
        submission.name,
        submission.email,
        submission.project_type,
        submission.budget,
        received,
        message,
    );

    OutgoingEmail {
        from: addresses.from.clone(),
        to: vec![addresses.studio_inbox.clone()],
        cc: vec![submission.email.clone()],
        reply_to: Some(submission.email.clone()),
        subject,
        html: document(&addresses.studio_name, body),
        text,
    }
}

/// Acknowledgment to the submitter.
pub fn acknowledgment_email(
    addresses: &ContactAddresses,
    submission: &ContactSubmission,
) -> OutgoingEmail {
    let subject = format!("Thanks for reaching out, {}", submission.name);

    let body = html! {
        p { "Hi " (submission.name) "," }
        p {
            "Thanks for getting in touch about your "
            (submission.project_type.to_lowercase())
            " project. We read every message and will get back to you within two working days."
        }
        p { "For reference, here is what you sent us:" }
        ul {
            li { "Project type: " (submission.project_type) }
            li { "Budget: " (submission.budget) }
            @if let Some(message) = &submission.message {
                li { "Message: " (message) }
            }
        }
        p { "Best," br; (addresses.studio_name) }
    };

    let mut text = format!(
        "Hi {},\n\n\
         Thanks for getting in touch about your {} project. We read every message \
         and will get back to you within two working days.\n\n\
         Project type: {}\nBudget: {}\n",
        submission.name,
        submission.project_type.to_lowercase(),
        submission.project_type,
        submission.budget,
    );
    if let Some(message) = &submission.message {
        text.push_str(&format!("Message: {message}\n"));
    }
    text.push_str(&format!("\nBest,\n{}\n", addresses.studio_name));

    OutgoingEmail {
        from: addresses.from.clone(),
        to: vec![submission.email.clone()],
        cc: Vec::new(),
        reply_to: Some(addresses.studio_inbox.clone()),
        subject,
        html: document(&addresses.studio_name, body),
        text,
    }
}

fn document(studio_name: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (studio_name) }
            }
            body style="font-family:-apple-system,Helvetica,Arial,sans-serif;color:#111;line-height:1.5" {
                (body)
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn addresses() -> ContactAddresses {
        ContactAddresses {
            from: "Studio <noreply@studio.test>".into(),
            studio_inbox: "hello@studio.test".into(),
            studio_name: "Studio".into(),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jan".into(),
            email: "jan@example.com".into(),
            project_type: "Music Video".into(),
            budget: "€3.000 - €8.000".into(),
            message: Some("<script>alert(1)</script>".into()),
        }
    }

    #[test]
    fn notification_goes_to_inbox_with_submitter_copied() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let email = notification_email(&addresses(), &submission(), at);

        assert_eq!(email.to, vec!["hello@studio.test"]);
        assert_eq!(email.cc, vec!["jan@example.com"]);
        assert_eq!(email.reply_to.as_deref(), Some("jan@example.com"));
        assert_eq!(email.subject, "New inquiry: Music Video from Jan");
        assert!(email.text.contains("Received: 2024-05-01 09:30 UTC"));
    }

    #[test]
    fn submitted_values_are_escaped_in_html() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let email = notification_email(&addresses(), &submission(), at);
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn acknowledgment_goes_to_submitter() {
        let email = acknowledgment_email(&addresses(), &submission());
        assert_eq!(email.to, vec!["jan@example.com"]);
        assert!(email.cc.is_empty());
        assert_eq!(email.reply_to.as_deref(), Some("hello@studio.test"));
        assert_eq!(email.subject, "Thanks for reaching out, Jan");
        assert!(email.text.contains("music video project"));
    }

    #[test]
    fn notification_without_message_says_so() {
        let submission = ContactSubmission {
            message: None,
            ..submission()
        };
        let email = notification_email(&addresses(), &submission, Utc::now());
        assert!(email.text.contains("(no message)"));
    }
}
