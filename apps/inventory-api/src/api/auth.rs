//! Auth API wiring

use axum::Router;
use domain_users::{auth_handlers, MongoUserRepository, UserService};

use crate::state::AppState;

/// Create the auth router
pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(&state.db);
    let service = UserService::new(repository);
    auth_handlers::router(service, state.jwt.clone())
}

/// Initialize user indexes (unique email)
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoUserRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
