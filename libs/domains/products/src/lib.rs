//! Products Domain
//!
//! A complete domain implementation for managing inventory products backed by
//! MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (auth guard on mutations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, id parsing, pagination metadata
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │Models/Query │  ← Entities, DTOs, list-query → filter/sort translation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("inventory");
//!
//! let repository = MongoProductRepository::new(&db);
//! let service = ProductService::new(repository);
//!
//! let jwt = JwtAuth::new(&JwtConfig::new("a-secret-that-is-at-least-32-chars!!"));
//! let router = handlers::router(service, jwt);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CategoryStats, CreateProduct, OverallStats, Product, ProductResponse, ProductStats,
    UpdateProduct,
};
pub use mongodb::MongoProductRepository;
pub use query::ProductListQuery;
pub use repository::ProductRepository;
pub use service::ProductService;
