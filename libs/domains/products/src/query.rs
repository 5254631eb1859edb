//! Translation of normalized list-query parameters into a MongoDB filter,
//! sort order, and pagination window.
//!
//! This is the one piece of this domain with real branching logic: every
//! combination of optional parameters must produce exactly the right filter
//! document, and pagination metadata must stay consistent with the window
//! actually queried.

use mongodb::bson::{doc, Document};
use serde::Deserialize;
use std::borrow::Cow;
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Fields the client may sort on; a `-` prefix flips to descending.
pub const SORTABLE_FIELDS: [&str; 4] = ["name", "price", "stock", "createdAt"];

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Normalized query parameters for listing products.
///
/// Arrives via [`axum_helpers::ValidatedQuery`], so handlers only ever see
/// coerced, defaulted, validated values.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_price_range", skip_on_field_errors = false))]
pub struct ProductListQuery {
    /// Page number, 1-based
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: i64,
    /// Page size, capped at 100
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
    /// Sort spec: one of name, price, stock, createdAt, optionally
    /// `-`-prefixed for descending. Defaults to newest first.
    #[validate(custom(function = "validate_sort"))]
    pub sort: Option<String>,
    /// Exact (case-sensitive) category match
    pub category: Option<String>,
    /// Inclusive lower price bound
    #[validate(range(min = 0.0, message = "minPrice must be non-negative"))]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[validate(range(min = 0.0, message = "maxPrice must be non-negative"))]
    pub max_price: Option<f64>,
    /// Case-insensitive substring match on name and description
    pub search: Option<String>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: None,
            category: None,
            min_price: None,
            max_price: None,
            search: None,
        }
    }
}

impl ProductListQuery {
    /// Build the MongoDB filter document from the present parameters.
    pub fn filter_document(&self) -> Document {
        let mut filter = doc! {};

        if let Some(ref category) = self.category {
            filter.insert("category", category);
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let mut price_filter = doc! {};
            if let Some(min) = self.min_price {
                price_filter.insert("$gte", min);
            }
            if let Some(max) = self.max_price {
                price_filter.insert("$lte", max);
            }
            filter.insert("price", price_filter);
        }

        if let Some(ref search) = self.search {
            filter.insert(
                "$or",
                vec![
                    doc! { "name": { "$regex": search, "$options": "i" } },
                    doc! { "description": { "$regex": search, "$options": "i" } },
                ],
            );
        }

        filter
    }

    /// Build the sort document; default is newest first.
    pub fn sort_document(&self) -> Document {
        match self.sort.as_deref() {
            Some(spec) => match spec.strip_prefix('-') {
                Some(field) => doc! { field: -1 },
                None => doc! { spec: 1 },
            },
            None => doc! { "createdAt": -1 },
        }
    }

    /// Number of documents to skip for the requested page.
    pub fn skip(&self) -> u64 {
        ((self.page - 1) * self.limit).max(0) as u64
    }
}

fn validate_sort(sort: &str) -> Result<(), ValidationError> {
    let field = sort.strip_prefix('-').unwrap_or(sort);
    if !SORTABLE_FIELDS.contains(&field) {
        let mut err = ValidationError::new("sort");
        err.message = Some(Cow::Owned(format!(
            "sort must be one of: {}",
            SORTABLE_FIELDS.join(", ")
        )));
        err.add_param(Cow::Borrowed("value"), &sort);
        return Err(err);
    }
    Ok(())
}

fn validate_price_range(query: &ProductListQuery) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
        if max < min {
            let mut err = ValidationError::new("price_range");
            err.message = Some(Cow::Borrowed(
                "maxPrice must be greater than or equal to minPrice",
            ));
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = ProductListQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_empty_filter() {
        assert!(ProductListQuery::default().filter_document().is_empty());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let query = ProductListQuery {
            category: Some("Electronics".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query.filter_document(),
            doc! { "category": "Electronics" }
        );
    }

    #[test]
    fn test_price_range_bounds_applied_independently() {
        let min_only = ProductListQuery {
            min_price: Some(10.0),
            ..Default::default()
        };
        assert_eq!(
            min_only.filter_document(),
            doc! { "price": { "$gte": 10.0 } }
        );

        let max_only = ProductListQuery {
            max_price: Some(50.0),
            ..Default::default()
        };
        assert_eq!(
            max_only.filter_document(),
            doc! { "price": { "$lte": 50.0 } }
        );

        let both = ProductListQuery {
            min_price: Some(10.0),
            max_price: Some(50.0),
            ..Default::default()
        };
        assert_eq!(
            both.filter_document(),
            doc! { "price": { "$gte": 10.0, "$lte": 50.0 } }
        );
    }

    #[test]
    fn test_search_filter_is_case_insensitive_over_name_and_description() {
        let query = ProductListQuery {
            search: Some("iPhone".to_string()),
            ..Default::default()
        };
        let filter = query.filter_document();
        let or = filter.get_array("$or").unwrap();
        assert_eq!(or.len(), 2);
        assert_eq!(
            filter,
            doc! { "$or": [
                { "name": { "$regex": "iPhone", "$options": "i" } },
                { "description": { "$regex": "iPhone", "$options": "i" } },
            ]}
        );
    }

    #[test]
    fn test_combined_filters() {
        let query = ProductListQuery {
            category: Some("Books".to_string()),
            min_price: Some(5.0),
            search: Some("rust".to_string()),
            ..Default::default()
        };
        let filter = query.filter_document();
        assert!(filter.contains_key("category"));
        assert!(filter.contains_key("price"));
        assert!(filter.contains_key("$or"));
    }

    #[test]
    fn test_sort_defaults_to_newest_first() {
        assert_eq!(
            ProductListQuery::default().sort_document(),
            doc! { "createdAt": -1 }
        );
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let asc = ProductListQuery {
            sort: Some("price".to_string()),
            ..Default::default()
        };
        assert_eq!(asc.sort_document(), doc! { "price": 1 });

        let desc = ProductListQuery {
            sort: Some("-price".to_string()),
            ..Default::default()
        };
        assert_eq!(desc.sort_document(), doc! { "price": -1 });
    }

    #[test]
    fn test_sort_whitelist_enforced() {
        for bad in ["secretField", "-__proto__", "price; drop"] {
            let query = ProductListQuery {
                sort: Some(bad.to_string()),
                ..Default::default()
            };
            assert!(query.validate().is_err(), "sort {:?} should fail", bad);
        }

        for good in ["name", "-name", "createdAt", "-createdAt", "stock"] {
            let query = ProductListQuery {
                sort: Some(good.to_string()),
                ..Default::default()
            };
            assert!(query.validate().is_ok(), "sort {:?} should pass", good);
        }
    }

    #[test]
    fn test_pagination_window() {
        let query = ProductListQuery {
            page: 3,
            limit: 25,
            ..Default::default()
        };
        assert_eq!(query.skip(), 50);

        assert_eq!(ProductListQuery::default().skip(), 0);
    }

    #[test]
    fn test_limit_out_of_range_rejected() {
        let too_big = ProductListQuery {
            limit: MAX_LIMIT + 1,
            ..Default::default()
        };
        assert!(too_big.validate().is_err());

        let zero = ProductListQuery {
            limit: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let query = ProductListQuery {
            min_price: Some(50.0),
            max_price: Some(10.0),
            ..Default::default()
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("__all__"));
    }

    #[test]
    fn test_equal_price_bounds_allowed() {
        let query = ProductListQuery {
            min_price: Some(10.0),
            max_price: Some(10.0),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }
}
