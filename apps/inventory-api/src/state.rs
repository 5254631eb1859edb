//! Application state management

use axum_helpers::JwtAuth;
use mongodb::{Client, Database};

/// Shared application state; cheap to clone, no module-level singletons
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
    pub jwt: JwtAuth,
}
