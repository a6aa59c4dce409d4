use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "API for managing catalog products"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_products::handlers::URL, api = domain_products::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
