//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    round_price, CategoryStats, CreateProduct, OverallStats, Product, ProductStats, UpdateProduct,
};
use crate::query::ProductListQuery;
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for the query patterns this repository serves
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            // Category filter + default newest-first ordering
            IndexModel::builder()
                .keys(doc! { "category": 1, "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category_created_at".to_string())
                        .build(),
                )
                .build(),
            // Price range queries and price sorting
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price".to_string())
                        .build(),
                )
                .build(),
            // Default sort order
            IndexModel::builder()
                .keys(doc! { "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
            // Name lookups and name sorting
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_name".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    fn doc_count(doc: &Document, key: &str) -> u64 {
        match doc.get(key) {
            Some(Bson::Int32(v)) => *v as u64,
            Some(Bson::Int64(v)) => *v as u64,
            Some(Bson::Double(v)) => *v as u64,
            _ => 0,
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ProductListQuery) -> ProductResult<(Vec<Product>, u64)> {
        let filter = query.filter_document();

        let total = self.collection.count_documents(filter.clone()).await?;

        let options = mongodb::options::FindOptions::builder()
            .sort(query.sort_document())
            .skip(query.skip())
            .limit(query.limit)
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok((products, total))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let filter = Self::id_filter(id);
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn aggregate_stats(&self) -> ProductResult<ProductStats> {
        let overall_pipeline = vec![doc! {
            "$group": {
                "_id": null,
                "totalProducts": { "$sum": 1 },
                "averagePrice": { "$avg": "$price" },
            }
        }];

        let mut cursor = self.collection.aggregate(overall_pipeline).await?;
        let overall = match cursor.try_next().await? {
            Some(doc) => OverallStats {
                total_products: Self::doc_count(&doc, "totalProducts"),
                average_price: round_price(doc.get_f64("averagePrice").unwrap_or(0.0)),
            },
            // Empty collection: no group document is emitted at all
            None => OverallStats {
                total_products: 0,
                average_price: 0.0,
            },
        };

        let by_category_pipeline = vec![
            doc! {
                "$group": {
                    "_id": "$category",
                    "count": { "$sum": 1 },
                    "averagePrice": { "$avg": "$price" },
                }
            },
            // Deterministic output: category name ascending
            doc! { "$sort": { "_id": 1 } },
        ];

        let cursor = self.collection.aggregate(by_category_pipeline).await?;
        let groups: Vec<Document> = cursor.try_collect().await?;

        let by_category = groups
            .into_iter()
            .map(|doc| CategoryStats {
                category: doc.get_str("_id").unwrap_or_default().to_string(),
                count: Self::doc_count(&doc, "count"),
                average_price: round_price(doc.get_f64("averagePrice").unwrap_or(0.0)),
            })
            .collect();

        Ok(ProductStats {
            overall,
            by_category,
        })
    }
}
