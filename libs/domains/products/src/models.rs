use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Database-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor")]
    pub name: String,
    /// Always greater than zero
    #[schema(example = 300.0)]
    pub price: f64,
    /// Whether the product can currently be ordered
    #[schema(example = true)]
    pub availability: bool,
}

impl Product {
    /// Overwrite every mutable field
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
        self.availability = update.availability;
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
    }
}

/// Input for creating a product.
///
/// New products are always available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Monitor")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
}

/// Input for replacing a product's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[schema(example = "Monitor 27\"")]
    pub name: String,
    #[schema(example = 349.99)]
    pub price: f64,
    #[schema(example = false)]
    pub availability: bool,
}

/// Validated `{id}` path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

/// Validated `PUT /{id}` request: the target id plus the new field values
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceProduct {
    pub id: i32,
    pub update: UpdateProduct,
}

/// `{ "data": Product }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductData {
    pub data: Product,
}

/// `{ "data": [Product] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListData {
    pub data: Vec<Product>,
}

/// `{ "data": "..." }` confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageData {
    #[schema(example = "Product deleted successfully")]
    pub data: String,
}
