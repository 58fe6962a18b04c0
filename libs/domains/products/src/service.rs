//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductId, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Ids arrive as raw path segments. One that is not a valid ObjectId is
/// reported as `NotFound` without touching the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let product_id = parse_id(id)?;
        self.repository
            .get_by_id(product_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Update the present fields of a product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let product_id = parse_id(id)?;
        self.repository.update(product_id, input).await
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<Product> {
        let product_id = parse_id(id)?;
        self.repository.delete(product_id).await
    }
}

fn parse_id(raw: &str) -> ProductResult<ProductId> {
    ProductId::parse(raw).ok_or_else(|| {
        tracing::debug!(id = raw, "Rejected malformed product id");
        ProductError::NotFound(raw.to_string())
    })
}
