use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL-backed product repository.
///
/// Built with [`PgProductRepository::disconnected`] when the database could not
/// be reached at startup; every call then fails with [`ProductError::Unavailable`].
#[derive(Clone, Debug)]
pub struct PgProductRepository {
    db: Option<DatabaseConnection>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn disconnected() -> Self {
        Self { db: None }
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    fn db(&self) -> ProductResult<&DatabaseConnection> {
        self.db.as_ref().ok_or(ProductError::Unavailable)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(self.db()?).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(self.db()?).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::Id)
            .all(self.db()?)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        let model = match active_model.update(self.db()?).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(ProductError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(self.db()?).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
