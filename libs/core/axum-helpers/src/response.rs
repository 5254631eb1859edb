//! The uniform success envelope wrapping every successful response.

use serde::Serialize;
use utoipa::ToSchema;

/// Pagination metadata for list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Requested page (1-based)
    pub page: i64,
    /// Requested page size
    pub limit: i64,
    /// Total number of matching records
    pub total: u64,
    /// ceil(total / limit)
    pub total_pages: u64,
}

impl Pagination {
    /// Build pagination metadata; `total_pages` is computed as
    /// ceil(total / limit).
    pub fn new(page: i64, limit: i64, total: u64) -> Self {
        let limit = limit.max(1);
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit as u64),
        }
    }
}

/// Uniform success envelope: `{success: true, data, message?, pagination?}`.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "data": [ ... ],
///   "pagination": { "page": 1, "limit": 10, "total": 2, "totalPages": 1 }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true`
    pub success: bool,
    /// The response payload; omitted for message-only responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Present only on paginated list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl ApiResponse<serde_json::Value> {
    /// A data-less envelope carrying only a confirmation message,
    /// e.g. for DELETE responses.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            pagination: None,
        }
    }
}
