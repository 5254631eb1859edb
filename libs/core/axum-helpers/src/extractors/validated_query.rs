//! Query-string extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query-string extractor with automatic validation.
///
/// Numeric strings are coerced by serde, serde defaults are applied, and the
/// `Validate` derive runs before the handler sees the parameters, including
/// cross-field rules such as `maxPrice >= minPrice`.
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedQuery;
///
/// async fn list_products(
///     ValidatedQuery(query): ValidatedQuery<ProductListQuery>,
/// ) { /* ... */ }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::QueryRejection(e.body_text()).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedQuery(data))
    }
}
