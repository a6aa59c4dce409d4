use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Database unavailable")]
    Unavailable,
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::Database(e) => AppError::Database(e),
            ProductError::Unavailable => {
                AppError::DatabaseUnavailable("no database connection".to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
