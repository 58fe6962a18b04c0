use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Identifier of a stored product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(ObjectId);

impl ProductId {
    /// Parses a 24-hex-character ObjectId. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        ObjectId::parse_str(raw).ok().map(Self)
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for ProductId {
    fn from(id: ObjectId) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Product document as stored in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Product as returned over HTTP; the id is a hex string under `_id`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65f1c0a2b4d3e8a9c0f1e2d3")]
    pub id: String,
    #[schema(example = "Pen")]
    pub name: String,
    #[schema(example = 1.5)]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

/// Checked input for creating a product; `name` is already trimmed
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct CreateProduct {
    /// At least 2 characters after trimming
    pub name: String,
    /// Number, or numeric string, >= 0
    pub price: f64,
    pub description: Option<String>,
}

/// Checked partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            price: input.price,
            description: input.description,
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
    }
}
