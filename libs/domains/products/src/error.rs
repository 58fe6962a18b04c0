use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message returned for any id that does not resolve to a stored product
pub const NOT_FOUND_MESSAGE: &str = "Product Not Found";

#[derive(Debug, Error)]
pub enum ProductError {
    /// No product for the requested id; malformed ids land here too
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            ProductError::Database(msg) => AppError::Unexpected(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}
