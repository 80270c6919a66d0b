//! Contact form submissions.
//!
//! A submission is ephemeral: it is validated for required-field presence,
//! handed to the mailer, and dropped. Option lists for the form live here so
//! the page renderer and any client share one source.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Message returned to callers when a required field is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Project types offered by the contact form.
pub const PROJECT_TYPES: &[&str] = &[
    "Commercial",
    "Music Video",
    "Documentary",
    "Branded Content",
    "Short Film",
    "Other",
];

/// Budget ranges offered by the contact form.
pub const BUDGET_RANGES: &[&str] = &[
    "< €3.000",
    "€3.000 - €8.000",
    "€8.000 - €15.000",
    "€15.000 - €30.000",
    "€30.000+",
];

/// Raw contact payload as posted by the form.
///
/// Every field is optional at this layer; [`ContactRequest::validate`]
/// decides what is required. Scalar values (numbers, booleans) are read as
/// their text form; arrays and objects count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub project_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub message: Option<String>,
}

/// Any JSON value a form field may arrive as.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Other(serde::de::IgnoredAny),
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<FieldValue>::deserialize(deserializer)? {
        Some(FieldValue::Text(text)) => Some(text),
        Some(FieldValue::Integer(n)) => Some(n.to_string()),
        Some(FieldValue::Unsigned(n)) => Some(n.to_string()),
        Some(FieldValue::Float(n)) => Some(n.to_string()),
        Some(FieldValue::Bool(b)) => Some(b.to_string()),
        Some(FieldValue::Other(_)) | None => None,
    })
}

/// A contact submission with all required fields present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget: String,
    pub message: Option<String>,
}

impl ContactRequest {
    /// Check required-field presence and produce a [`ContactSubmission`].
    ///
    /// `name`, `email`, `projectType` and `budget` must be present and
    /// non-blank. `message` is optional; a blank message becomes `None`.
    /// Values are trimmed but otherwise not checked against the option lists.
    pub fn validate(self) -> Result<ContactSubmission, CoreError> {
        let (Some(name), Some(email), Some(project_type), Some(budget)) = (
            present(self.name),
            present(self.email),
            present(self.project_type),
            present(self.budget),
        ) else {
            return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        };

        Ok(ContactSubmission {
            name,
            email,
            project_type,
            budget,
            message: present(self.message),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
