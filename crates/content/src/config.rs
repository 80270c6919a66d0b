use crate::error::ContentError;

/// Default API version sent with every query.
pub const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Default API host; project ids are prepended as a subdomain.
pub const DEFAULT_API_HOST: &str = "api.sanity.io";

/// Host serving cached, unauthenticated reads.
pub const CDN_API_HOST: &str = "apicdn.sanity.io";

/// Options identifying the remote content repository.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Content-store project identity.
    pub project_id: String,
    /// Dataset name within the project (e.g. `production`).
    pub dataset: String,
    /// Dated API version (default: `2024-01-01`).
    pub api_version: String,
    /// Read token. Authenticated reads never use the CDN.
    pub token: Option<String>,
    /// Allow cached reads from the CDN host.
    pub use_cdn: bool,
    /// Explicit base URL (scheme and host), overriding the derived one.
    pub base_url: Option<String>,
}

impl ContentConfig {
    /// Build a configuration for `project_id`/`dataset` with defaults for
    /// everything else.
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: false,
            base_url: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default         |
    /// |----------------------|-----------------|
    /// | `SANITY_PROJECT_ID`  | required        |
    /// | `SANITY_DATASET`     | required        |
    /// | `SANITY_API_VERSION` | `2024-01-01`    |
    /// | `SANITY_API_TOKEN`   | none            |
    /// | `SANITY_USE_CDN`     | `false`         |
    /// | `SANITY_API_URL`     | derived         |
    pub fn from_env() -> Result<Self, ContentError> {
        let config = Self {
            project_id: required_env("SANITY_PROJECT_ID")?,
            dataset: required_env("SANITY_DATASET")?,
            api_version: std::env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
            token: std::env::var("SANITY_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            use_cdn: std::env::var("SANITY_USE_CDN")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            base_url: std::env::var("SANITY_API_URL")
                .ok()
                .filter(|u| !u.is_empty()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the repository identity is present.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.project_id.trim().is_empty() {
            return Err(ContentError::Config(
                "project id is missing (set SANITY_PROJECT_ID)".into(),
            ));
        }
        if self.dataset.trim().is_empty() {
            return Err(ContentError::Config(
                "dataset is missing (set SANITY_DATASET)".into(),
            ));
        }
        Ok(())
    }

    /// Base URL that queries are sent to.
    pub fn api_base_url(&self) -> String {
        if let Some(url) = &self.base_url {
            return url.trim_end_matches('/').to_string();
        }
        let host = if self.use_cdn && self.token.is_none() {
            CDN_API_HOST
        } else {
            DEFAULT_API_HOST
        };
        format!("https://{}.{host}", self.project_id)
    }

    /// Full URL of the query endpoint for the configured dataset.
    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.api_base_url(),
            self.api_version,
            self.dataset
        )
    }
}

fn required_env(name: &str) -> Result<String, ContentError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ContentError::Config(format!("{name} must be set")))
}
