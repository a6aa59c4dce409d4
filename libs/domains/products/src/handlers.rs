use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use axum_helpers::{
    ErrorResponse, FieldError, Validated,
    errors::responses::{
        BadRequestValidationResponse, ForbiddenOriginResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, MessageData, Product, ProductData, ProductId, ProductListData, ReplaceProduct,
    UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Mount point of the products API, relative to `/api`
pub const URL: &str = "/products";

pub const TAG: &str = "products";

/// Confirmation returned by delete
pub const DELETED_MESSAGE: &str = "Product deleted successfully";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            UpdateProduct,
            ProductData,
            ProductListData,
            MessageData,
            ErrorResponse,
            FieldError
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ForbiddenOriginResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of products", body = ProductListData),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListData>> {
    let products = service.list_products().await?;
    Ok(Json(ProductListData { data: products }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(input): Validated<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ProductData { data: product })))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<ProductData>> {
    let product = service.get_product(id).await?;
    Ok(Json(ProductData { data: product }))
}

/// Replace a product's name, price and availability
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ReplaceProduct { id, update }): Validated<ReplaceProduct>,
) -> ProductResult<Json<ProductData>> {
    let product = service.update_product(id, update).await?;
    Ok(Json(ProductData { data: product }))
}

/// Flip a product's availability. Any request body is ignored.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = ProductData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<ProductData>> {
    let product = service.toggle_availability(id).await?;
    Ok(Json(ProductData { data: product }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = MessageData),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductId(id)): Validated<ProductId>,
) -> ProductResult<Json<MessageData>> {
    service.delete_product(id).await?;
    Ok(Json(MessageData {
        data: DELETED_MESSAGE.to_string(),
    }))
}
