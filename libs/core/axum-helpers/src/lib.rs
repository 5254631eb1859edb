//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: stateless JWT authentication (token issuance, verification,
//!   bearer-token middleware)
//! - **[`errors`]**: the error taxonomy and the uniform error envelope
//! - **[`extractors`]**: validating extractors for JSON bodies and query strings
//! - **[`response`]**: the uniform success envelope and pagination metadata
//! - **[`server`]**: router bootstrap (docs, middleware stack) and serving
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod response;
pub mod server;

// Re-export auth types
pub use auth::{AuthClaims, AuthError, JwtAuth, JwtConfig, require_auth};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{ValidatedJson, ValidatedQuery};

// Re-export envelope types
pub use response::{ApiResponse, Pagination};

// Re-export server functions
pub use server::{create_app, create_router, shutdown_signal};
