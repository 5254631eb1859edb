//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "An internal server error occurred",
            "code": "INTERNAL_ERROR"
        }
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Request validation failed",
            "code": "VALIDATION_ERROR",
            "details": {
                "name": [{
                    "code": "length",
                    "message": "name must be between 1 and 100 characters",
                    "params": {"min": 1, "max": 100, "value": ""}
                }]
            }
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Product not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Product '0193d5e2-7a90-7c3e-b68c-8f2d4c4e1a2b' not found",
            "code": "PRODUCT_NOT_FOUND"
        }
    })
)]
pub struct ProductNotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - missing, invalid or expired bearer token",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Authentication token is missing",
            "code": "NO_TOKEN"
        }
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - duplicate unique field",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Duplicate value for field 'email'",
            "code": "DUPLICATE_FIELD"
        }
    })
)]
pub struct DuplicateFieldResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - invalid credentials",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Invalid email or password",
            "code": "INVALID_CREDENTIALS"
        }
    })
)]
pub struct InvalidCredentialsResponse(pub ErrorResponse);
