use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductStats, UpdateProduct};
use crate::query::ProductListQuery;

/// Repository trait for Product persistence
///
/// Implementations can use different storage backends; the rest of the
/// domain only sees this interface, which keeps handlers and the service
/// testable without a live database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product from a validated payload
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List products matching the query, returning the requested window and
    /// the total matching count
    async fn list(&self, query: ProductListQuery) -> ProductResult<(Vec<Product>, u64)>;

    /// Apply a partial update to an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> ProductResult<()>;

    /// Aggregate statistics over the entire collection
    async fn aggregate_stats(&self) -> ProductResult<ProductStats>;
}
