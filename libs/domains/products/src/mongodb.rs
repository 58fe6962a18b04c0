//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductId, UpdateProduct};
use crate::repository::ProductRepository;

/// Collection products are stored in
pub const COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    fn id_filter(id: ProductId) -> Document {
        doc! { "_id": id.as_object_id() }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self, input), fields(product_id = %id))]
    async fn update(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product> {
        let filter = Self::id_filter(id);
        let mut product = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply_update(input);

        let result = self.collection.replace_one(filter, &product).await?;
        if result.matched_count == 0 {
            // Deleted between the read and the write
            return Err(ProductError::NotFound(id.to_string()));
        }

        tracing::info!("Product updated successfully");
        Ok(product)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: ProductId) -> ProductResult<Product> {
        let product = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        tracing::info!("Product deleted successfully");
        Ok(product)
    }
}
