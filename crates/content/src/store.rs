//! The content-store seam.
//!
//! Handlers depend on [`ContentStore`] rather than on the HTTP client so
//! tests can substitute an in-memory store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ContentError;

/// Named query parameters, referenced as `$name` inside a query.
pub type QueryParams = BTreeMap<String, Value>;

/// Read-only access to a content repository.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Execute `query` with `params` and return the raw result value.
    ///
    /// The shape of the result (array, object, null) depends on the query.
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentError>;
}

/// Execute a query and decode its result into `T`.
pub async fn fetch<T: DeserializeOwned>(
    store: &dyn ContentStore,
    query: &str,
    params: &QueryParams,
) -> Result<T, ContentError> {
    let value = store.query(query, params).await?;
    Ok(serde_json::from_value(value)?)
}

/// Build a parameter map from `(name, value)` pairs.
pub fn params<const N: usize>(pairs: [(&str, Value); N]) -> QueryParams {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
