pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use core_config::Environment;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Uniform error envelope returned for every failed request.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": false,
///   "error": {
///     "message": "Request validation failed",
///     "code": "VALIDATION_ERROR",
///     "details": { "price": [{ "code": "price", "message": "...", "params": {...} }] }
///   }
/// }
/// ```
///
/// `stack` is only populated outside production builds.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Structured error information
    pub error: ErrorBody,
}

/// The `error` object inside [`ErrorResponse`].
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error identifier (e.g. "PRODUCT_NOT_FOUND")
    pub code: String,
    /// Optional structured details (e.g. per-field validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Diagnostic trace, present only outside production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                message: message.into(),
                code: code.as_str().to_string(),
                details: None,
                stack: None,
            },
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.error.details = Some(details);
        self
    }
}

/// Application error type that renders into the uniform error envelope.
///
/// Domain crates convert their own error enums into `AppError` exactly once;
/// handlers never format error bodies themselves.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query string error: {0}")]
    QueryRejection(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication token is missing")]
    NoToken,

    #[error("Authentication token is invalid")]
    InvalidToken,

    #[error("Authentication token has expired")]
    TokenExpired,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Duplicate value for field '{0}'")]
    DuplicateField(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert validator errors into per-field structured details.
///
/// Every violated rule is reported, not just the first: the map is keyed by
/// field path and each entry lists {code, message, params} where params
/// carries the offending value. Struct-level (cross-field) violations appear
/// under the `__all__` key.
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    Value::Object(details)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message, details, diagnostic) = match self {
            AppError::Validation(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(validation_details(&e)),
                    None,
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (ErrorCode::ValidationError, e.body_text(), None, None)
            }
            AppError::QueryRejection(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Query rejection: {}",
                    msg
                );
                (ErrorCode::ValidationError, msg, None, None)
            }
            AppError::InvalidInput(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Invalid input: {}",
                    msg
                );
                (ErrorCode::ValidationError, msg, None, None)
            }
            AppError::NoToken => {
                tracing::info!(error_code = ErrorCode::NoToken.code(), "Missing token");
                (
                    ErrorCode::NoToken,
                    ErrorCode::NoToken.default_message().to_string(),
                    None,
                    None,
                )
            }
            AppError::InvalidToken => {
                tracing::info!(error_code = ErrorCode::InvalidToken.code(), "Invalid token");
                (
                    ErrorCode::InvalidToken,
                    ErrorCode::InvalidToken.default_message().to_string(),
                    None,
                    None,
                )
            }
            AppError::TokenExpired => {
                tracing::info!(error_code = ErrorCode::TokenExpired.code(), "Expired token");
                (
                    ErrorCode::TokenExpired,
                    ErrorCode::TokenExpired.default_message().to_string(),
                    None,
                    None,
                )
            }
            AppError::InvalidCredentials => {
                // Deliberately generic: do not reveal whether the email exists
                tracing::info!(
                    error_code = ErrorCode::InvalidCredentials.code(),
                    "Credential check failed"
                );
                (
                    ErrorCode::InvalidCredentials,
                    ErrorCode::InvalidCredentials.default_message().to_string(),
                    None,
                    None,
                )
            }
            AppError::ProductNotFound(id) => {
                tracing::info!(
                    error_code = ErrorCode::ProductNotFound.code(),
                    "Product not found: {}",
                    id
                );
                (
                    ErrorCode::ProductNotFound,
                    format!("Product '{}' not found", id),
                    None,
                    None,
                )
            }
            AppError::DuplicateField(field) => {
                tracing::info!(
                    error_code = ErrorCode::DuplicateField.code(),
                    "Duplicate field: {}",
                    field
                );
                (
                    ErrorCode::DuplicateField,
                    format!("Duplicate value for field '{}'", field),
                    None,
                    None,
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (ErrorCode::NotFound, msg, None, None)
            }
            AppError::Database(msg) => {
                // Log the real error but never expose it to clients
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {}",
                    msg
                );
                (
                    ErrorCode::DatabaseError,
                    ErrorCode::DatabaseError.default_message().to_string(),
                    None,
                    Some(msg),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
                (
                    ErrorCode::ServiceUnavailable,
                    ErrorCode::ServiceUnavailable.default_message().to_string(),
                    None,
                    Some(msg),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                    Some(msg),
                )
            }
        };

        let stack = if Environment::from_env().is_production() {
            None
        } else {
            diagnostic
        };

        let body = Json(ErrorResponse {
            success: false,
            error: ErrorBody {
                message,
                code: code.as_str().to_string(),
                details,
                stack,
            },
        });

        (code.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        name: String,
        #[validate(range(min = 0))]
        stock: i64,
    }

    #[test]
    fn test_validation_details_reports_every_field() {
        let payload = Payload {
            name: String::new(),
            stock: -5,
        };
        let errors = payload.validate().unwrap_err();
        let details = validation_details(&errors);
        let obj = details.as_object().unwrap();

        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("stock"));
        assert!(obj["stock"][0]["params"]["value"].is_number());
    }

    #[test]
    fn test_error_response_statuses() {
        assert_eq!(
            AppError::NoToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::ProductNotFound("abc".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DuplicateField("email".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let response = ErrorResponse::new(ErrorCode::ProductNotFound, "Product 'x' not found");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "PRODUCT_NOT_FOUND");
        assert_eq!(value["error"]["message"], "Product 'x' not found");
        assert!(value["error"].get("details").is_none());
        assert!(value["error"].get("stack").is_none());
    }
}
