//! Content-store access for the studio site.
//!
//! - [`ContentConfig`] identifies the remote repository (project, dataset,
//!   token, CDN usage).
//! - [`ContentClient`] executes queries over HTTP.
//! - [`ContentStore`] is the trait handlers depend on.
//! - [`films`] holds the typed reads built on the [`queries`] catalogue.

pub mod client;
pub mod config;
pub mod error;
pub mod films;
pub mod queries;
pub mod store;

pub use client::ContentClient;
pub use config::ContentConfig;
pub use error::ContentError;
pub use store::{ContentStore, QueryParams};
