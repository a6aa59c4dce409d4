use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new, available product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products, highest id first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Persist every field of an existing product
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID; `false` when nothing was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    products: BTreeMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing).
///
/// Ids are assigned sequentially from 1 and never reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let product = Product {
            id: store.last_id,
            name: input.name,
            price: input.price,
            availability: true,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().rev().cloned().collect())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let existing = store
            .products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *existing = product.clone();

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        let removed = store.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}
