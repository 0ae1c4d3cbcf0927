use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Products API",
        version = "0.1.0",
        description = "CRUD API for managing products"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
