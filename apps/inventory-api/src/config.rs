//! Configuration for the Inventory API

use axum_helpers::JwtConfig;
use core_config::{server::ServerConfig, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, assembled from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            mongodb,
            server,
            jwt,
            environment,
        })
    }
}
