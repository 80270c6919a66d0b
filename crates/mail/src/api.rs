//! Mail delivery through an HTTP mail API.
//!
//! [`ApiMailer`] posts a JSON message to `{api_url}/emails` with a bearer
//! API key and returns the provider's JSON response (typically `{"id": ..}`).

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::MailError;
use crate::mailer::Mailer;
use crate::message::OutgoingEmail;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.resend.com";

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ApiMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ApiMailer {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, MailError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Mailer for ApiMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, MailError> {
        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;
        tracing::info!(to = ?email.to, subject = %email.subject, "Email sent via mail API");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "Studio <noreply@studio.test>".into(),
            to: vec!["hello@studio.test".into()],
            cc: vec!["jan@example.com".into()],
            reply_to: Some("jan@example.com".into()),
            subject: "New inquiry".into(),
            html: "<p>Hi</p>".into(),
            text: "Hi".into(),
        }
    }

    #[tokio::test]
    async fn posts_json_and_returns_provider_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/emails")
            .match_header("authorization", "Bearer re_test")
            .match_body(Matcher::PartialJson(json!({
                "to": ["hello@studio.test"],
                "cc": ["jan@example.com"],
                "reply_to": "jan@example.com",
                "subject": "New inquiry"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#)
            .expect(1)
            .create_async()
            .await;

        let mailer = ApiMailer::new(server.url(), "re_test").unwrap();
        let data = mailer.send(&email()).await.unwrap();

        assert_eq!(data["id"], "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_send_is_an_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/emails")
            .with_status(422)
            .with_body(r#"{"name":"validation_error","message":"Invalid `from` field."}"#)
            .create_async()
            .await;

        let mailer = ApiMailer::new(server.url(), "re_test").unwrap();
        let err = mailer.send(&email()).await.unwrap_err();

        assert_matches!(err, MailError::Api { status: 422, .. });
    }
}
