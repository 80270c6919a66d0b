//! HTTP client for the content store's query API.
//!
//! Every call is a fresh read; nothing is cached on this side.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ContentConfig;
use crate::error::ContentError;
use crate::store::{ContentStore, QueryParams};

/// HTTP request timeout for a single query.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Envelope returned by the query endpoint.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

/// Query client for one project/dataset.
pub struct ContentClient {
    client: reqwest::Client,
    config: ContentConfig,
    query_url: String,
}

impl fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentClient")
            .field("query_url", &self.query_url)
            .field("authenticated", &self.config.token.is_some())
            .finish_non_exhaustive()
    }
}

impl ContentClient {
    /// Create a client, failing fast if the configuration is incomplete.
    pub fn new(config: ContentConfig) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Self::with_client(client, config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        config: ContentConfig,
    ) -> Result<Self, ContentError> {
        config.validate()?;
        let query_url = config.query_url();
        Ok(Self {
            client,
            config,
            query_url,
        })
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Ensure the response has a success status code, or turn it into a
    /// [`ContentError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ContentError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ContentError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ContentStore for ContentClient {
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentError> {
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(params.len() + 1);
        pairs.push(("query".to_string(), query.to_string()));
        for (name, value) in params {
            pairs.push((format!("${name}"), serde_json::to_string(value)?));
        }

        let mut request = self.client.get(&self.query_url).query(&pairs);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(dataset = %self.config.dataset, params = params.len(), "Querying content store");

        let response = Self::ensure_success(request.send().await?).await?;
        let bytes = response.bytes().await?;
        let envelope: QueryResponse = serde_json::from_slice(&bytes)?;
        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::store::params;

    fn config_for(server: &mockito::Server) -> ContentConfig {
        let mut config = ContentConfig::new("proj", "production");
        config.base_url = Some(server.url());
        config
    }

    #[test]
    fn new_fails_fast_without_project_id() {
        let result = ContentClient::new(ContentConfig::new("", "production"));
        assert_matches!(result, Err(ContentError::Config(_)));
    }

    #[test]
    fn debug_output_hides_the_token() {
        let mut config = ContentConfig::new("proj", "production");
        config.token = Some("sk-secret".into());
        let client = ContentClient::new(config).unwrap();

        let debug = format!("{client:?}");
        assert!(debug.contains("authenticated: true"));
        assert!(!debug.contains("sk-secret"));
        assert_eq!(client.config().dataset, "production");
    }

    #[tokio::test]
    async fn query_sends_encoded_params_and_unwraps_result() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2024-01-01/data/query/production")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "*[_type == \"film\"]".into()),
                Matcher::UrlEncoded("$category".into(), "\"commercial\"".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ms":3,"query":"...","result":[{"_id":"a"}]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = ContentClient::new(config_for(&server)).unwrap();
        let result = client
            .query(
                "*[_type == \"film\"]",
                &params([("category", json!("commercial"))]),
            )
            .await
            .unwrap();

        assert_eq!(result, json!([{ "_id": "a" }]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn token_is_sent_as_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2024-01-01/data/query/production")
            .match_query(Matcher::Any)
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_body(r#"{"result":null}"#)
            .expect(1)
            .create_async()
            .await;

        let mut config = config_for(&server);
        config.token = Some("sk-test".into());
        let client = ContentClient::new(config).unwrap();
        let result = client.query("*[0]", &QueryParams::new()).await.unwrap();

        assert_eq!(result, Value::Null);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2024-01-01/data/query/production")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error":{"description":"expected ']'"}}"#)
            .create_async()
            .await;

        let client = ContentClient::new(config_for(&server)).unwrap();
        let err = client.query("*[", &QueryParams::new()).await.unwrap_err();

        assert_matches!(err, ContentError::Api { status: 400, ref body } if body.contains("expected"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2024-01-01/data/query/production")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let client = ContentClient::new(config_for(&server)).unwrap();
        let err = client.query("*", &QueryParams::new()).await.unwrap_err();

        assert_matches!(err, ContentError::Decode(_));
    }
}
