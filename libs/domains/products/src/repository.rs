use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductId, UpdateProduct};

/// Repository trait for Product persistence
///
/// Each method is a single-document operation; there is no filtering or
/// pagination.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All stored products
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ProductId) -> ProductResult<Option<Product>>;

    /// Insert a new product with a freshly generated id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Apply the present fields of `input` and persist; `NotFound` if absent
    async fn update(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product>;

    /// Remove a product and return it; `NotFound` if absent
    async fn delete(&self, id: ProductId) -> ProductResult<Product>;
}
