use std::sync::Arc;

use studio_content::ContentStore;
use studio_mail::{ContactAddresses, Mailer};
use tokio_util::task::TaskTracker;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc` or is a handle.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Content repository (HTTP client in production, fakes in tests).
    pub content: Arc<dyn ContentStore>,
    /// Outbound mail transport.
    pub mailer: Arc<dyn Mailer>,
    /// Sender/recipient addresses for contact mail.
    pub mail_addresses: Arc<ContactAddresses>,
    /// Tracks background sends so shutdown can wait for them.
    pub background: TaskTracker,
}
