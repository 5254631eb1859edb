//! Product Service - Business logic layer

use axum_helpers::Pagination;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductStats, UpdateProduct};
use crate::query::ProductListQuery;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validation has already happened at the gate by the time input reaches
/// this layer; the service parses opaque ids, orchestrates the repository,
/// and derives pagination metadata.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// An id that is not a well-formed opaque identifier is treated the same
    /// as an unknown one: not found, never a different error kind.
    fn parse_id(id: &str) -> ProductResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Get a product by its opaque id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let parsed = Self::parse_id(id)?;
        self.repository
            .get_by_id(parsed)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// List products for the validated query, with pagination metadata
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        query: ProductListQuery,
    ) -> ProductResult<(Vec<Product>, Pagination)> {
        let page = query.page;
        let limit = query.limit;

        let (items, total) = self.repository.list(query).await?;

        Ok((items, Pagination::new(page, limit, total)))
    }

    /// Apply a partial update to an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: &str,
        input: UpdateProduct,
    ) -> ProductResult<Product> {
        let parsed = Self::parse_id(id)?;
        self.repository.update(parsed, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let parsed = Self::parse_id(id)?;
        self.repository.delete(parsed).await
    }

    /// Aggregate statistics over the entire collection
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ProductResult<ProductStats> {
        self.repository.aggregate_stats().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
