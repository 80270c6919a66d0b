//! Shared query parameter types for API and page handlers.

use serde::Deserialize;

/// Optional category filter (`?category=`).
///
/// A blank value is treated the same as an absent one.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

impl CategoryParams {
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
