//! HTTP handlers for the products API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    IdPath, ValidatedJson,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::ProductResult;
use crate::models::ProductDto;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        list_products_born_between,
        list_products_by_name,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductDto),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Query parameters for the birth date range filter
#[derive(Debug, Deserialize, IntoParams)]
pub struct BornBetweenQuery {
    /// Inclusive lower bound, ISO format (YYYY-MM-DD)
    #[serde(rename = "fromDate")]
    pub from_date: NaiveDate,
    /// Inclusive upper bound, ISO format (YYYY-MM-DD)
    #[serde(rename = "toDate")]
    pub to_date: NaiveDate,
}

/// Query parameters for the name fragment filter
#[derive(Debug, Deserialize, IntoParams)]
pub struct NameQuery {
    pub name: String,
}

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/produtos", get(list_products))
        .route("/produtos/bornBetween", get(list_products_born_between))
        .route("/produtos/name", get(list_products_by_name))
        .route("/produto", post(create_product))
        .route("/produto/{id}", put(update_product).delete(delete_product))
        .with_state(shared_service)
}

/// Get all products
#[utoipa::path(
    get,
    path = "/produtos",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = service.list_products().await?;

    tracing::info!(count = products.len(), "Listed products");

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Get all products born inside the inclusive date range
#[utoipa::path(
    get,
    path = "/produtos/bornBetween",
    tag = "Products",
    params(BornBetweenQuery),
    responses(
        (status = 200, description = "Products in the date range", body = Vec<ProductDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products_born_between<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<BornBetweenQuery>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = service
        .products_born_between(query.from_date, query.to_date)
        .await?;

    tracing::info!(
        from_date = %query.from_date,
        to_date = %query.to_date,
        count = products.len(),
        "Listed products born between dates"
    );

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Get all products whose name contains the fragment
#[utoipa::path(
    get,
    path = "/produtos/name",
    tag = "Products",
    params(NameQuery),
    responses(
        (status = 200, description = "Products matching the name fragment", body = Vec<ProductDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products_by_name<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<NameQuery>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = service.products_by_name_part(&query.name).await?;

    tracing::info!(
        name = %query.name,
        count = products.len(),
        "Listed products by name fragment"
    );

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/produto",
    tag = "Products",
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product created successfully", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(payload): ValidatedJson<ProductDto>,
) -> ProductResult<Json<ProductDto>> {
    let product = service.create_product(payload).await?;

    tracing::info!(product_id = product.id.unwrap_or_default(), "Created product");

    Ok(Json(product.into()))
}

/// Update a product; the path id overrides any id in the body
#[utoipa::path(
    put,
    path = "/produto/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<ProductDto>,
) -> ProductResult<Json<ProductDto>> {
    let product = service.update_product(id, payload).await?;

    tracing::info!(product_id = id, "Updated product");

    Ok(Json(product.into()))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/produto/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;

    tracing::info!(product_id = id, "Deleted product");

    Ok(StatusCode::OK)
}
