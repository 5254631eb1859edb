use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Round a price to exactly 2 fractional digits.
///
/// The validation gate already rejects inputs with more precision; this is
/// the persistence-side invariant so a product never leaves the store with
/// stray digits.
pub(crate) fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// Product entity - represents one inventory item stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name (1-100 chars, trimmed)
    pub name: String,
    /// Optional description (max 500 chars)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price, persisted rounded to 2 decimal places
    pub price: f64,
    /// Product category
    pub category: String,
    /// Current stock quantity (never negative)
    pub stock: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Wire representation of a product, including the computed availability
/// flag. This is what every endpoint returns; the flag is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub stock: i64,
    /// stock > 0, computed
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            availability: product.stock > 0,
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: f64,
    /// Required; `Option` so a missing field surfaces as a validation
    /// violation alongside the others instead of a deserialization error
    #[validate(required(message = "category is required"), length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "stock must be a non-negative integer"))]
    pub stock: i64,
}

/// DTO for a partial product update; at least one field must be present
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_has_changes", skip_on_field_errors = false))]
pub struct UpdateProduct {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Option<f64>,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,
    #[validate(range(min = 0, message = "stock must be a non-negative integer"))]
    pub stock: Option<i64>,
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
    }
}

fn validate_update_has_changes(update: &UpdateProduct) -> Result<(), ValidationError> {
    if update.is_empty() {
        let mut err = ValidationError::new("at_least_one_field");
        err.message = Some(Cow::Borrowed("at least one field must be provided"));
        return Err(err);
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.len() > 100 {
        let mut err = ValidationError::new("name");
        err.message = Some(Cow::Borrowed("name must be between 1 and 100 characters"));
        err.add_param(Cow::Borrowed("value"), &name);
        return Err(err);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price <= 0.0 || !price.is_finite() {
        let mut err = ValidationError::new("price");
        err.message = Some(Cow::Borrowed("price must be greater than 0"));
        err.add_param(Cow::Borrowed("value"), &price);
        return Err(err);
    }

    // More than 2 fractional digits is rejected, not silently rounded
    let scaled = price * 100.0;
    if (scaled - scaled.round()).abs() > 1e-6 {
        let mut err = ValidationError::new("price");
        err.message = Some(Cow::Borrowed("price must have at most 2 decimal places"));
        err.add_param(Cow::Borrowed("value"), &price);
        return Err(err);
    }

    Ok(())
}

/// Overall collection statistics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_products: u64,
    /// Rounded to 2 decimal places
    pub average_price: f64,
}

/// Per-category statistics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: String,
    pub count: u64,
    /// Rounded to 2 decimal places
    pub average_price: f64,
}

/// Statistics over the entire (unfiltered) product collection.
/// Category groups are ordered by category name ascending.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub overall: OverallStats,
    pub by_category: Vec<CategoryStats>,
}

impl Product {
    /// Create a new product from a validated CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name.trim().to_string(),
            description: input.description,
            price: round_price(input.price),
            category: input.category.unwrap_or_default(),
            stock: input.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated partial update, refreshing the update timestamp
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = round_price(price);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the product can currently be bought
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}
