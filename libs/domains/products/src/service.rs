use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic.
///
/// Inputs arrive already validated; each mutation issues exactly one write.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products, newest first
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Replace name, price and availability of an existing product
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.apply_update(input);
        self.repository.update(product).await
    }

    /// Flip the stored availability
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.toggle_availability();

        tracing::debug!(
            product_id = id,
            availability = product.availability,
            "Toggling availability"
        );
        self.repository.update(product).await
    }

    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
