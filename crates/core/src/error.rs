#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with slug {slug}")]
    NotFound { entity: &'static str, slug: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
