//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, ValidationErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "connection closed" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - body could not be decoded",
    content_type = "application/json",
    example = json!({ "error": "expected value at line 1 column 1" })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Product Not Found" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - field rules violated",
    content_type = "application/json",
    example = json!({ "errors": [
        { "name": "Should be at least 2 Characters" },
        { "price": "Should be a number >= 0" }
    ]})
)]
pub struct ValidationFailedResponse(pub ValidationErrorResponse);
