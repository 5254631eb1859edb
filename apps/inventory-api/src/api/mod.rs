//! API routes module

pub mod auth;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all versioned API routes (nested under /api/v1 by the bootstrap)
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/auth", auth::router(state))
}

/// Initialize database indexes for every domain
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::init_indexes(state).await?;
    auth::init_indexes(state).await?;
    Ok(())
}
