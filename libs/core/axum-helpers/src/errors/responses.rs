//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - the backing store failed",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "PERSISTENCE_ERROR",
        "message": "failed to get product"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid input",
    content_type = "application/json",
    example = json!({
        "code": 1012,
        "error": "INVALID_INPUT",
        "message": "product price must be greater than 0"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "product not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
