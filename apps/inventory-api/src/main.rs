//! Inventory API - product inventory management with JWT authentication

use axum_helpers::JwtAuth;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect or exit: an unreachable store at startup is fatal
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let jwt = JwtAuth::new(&config.jwt);

    let state = AppState {
        config: config.clone(),
        mongo_client,
        db,
        jwt,
    };

    api::init_indexes(&state).await?;

    // Versioned API routes behind the common middleware stack, health
    // endpoints at the root for probes
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(api::health::router(state.clone()));

    info!(
        "Starting Inventory API on {}",
        state.config.server.address()
    );

    axum_helpers::create_app(app, &state.config.server).await?;

    info!("Inventory API shutdown complete");
    Ok(())
}
