//! HTTP handlers for Products API

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::{
        handlers::route_not_matched,
        responses::{
            BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
            ValidationFailedResponse,
        },
    },
    ValidatedFields,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, ProductResponse, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const CREATED_MSG: &str = "1 Product created :)";
pub const UPDATED_MSG: &str = "Product updated :)";
pub const DELETED_MSG: &str = "Product deleted";

/// `{"products": [...]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<ProductResponse>,
}

/// `{"product": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductEnvelope {
    pub product: ProductResponse,
}

/// `{"msg": "...", "product": {...}}` returned by mutating routes
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductChange {
    #[schema(example = "Product updated :)")]
    pub msg: String,
    pub product: ProductResponse,
}

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            ProductResponse, CreateProduct, UpdateProduct,
            ProductList, ProductEnvelope, ProductChange
        ),
        responses(
            NotFoundResponse,
            ValidationFailedResponse,
            BadRequestResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router, meant to be nested at `/products`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .method_not_allowed_fallback(route_not_matched)
        .with_state(shared_service)
}

/// Raw `{id}` segment. One that does not decode (e.g. invalid UTF-8) names no
/// product.
fn path_id(path: Result<Path<String>, PathRejection>) -> ProductResult<String> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected undecodable product id");
        ProductError::NotFound(rejection.body_text())
    })
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = ProductList),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductList>> {
    let products = service.list_products().await?;
    Ok(Json(ProductList {
        products: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

/// Create a new product
///
/// Accepts JSON or form-encoded bodies.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductChange),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedFields(input): ValidatedFields<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductChange {
            msg: CREATED_MSG.to_string(),
            product: product.into(),
        }),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductEnvelope),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    id: Result<Path<String>, PathRejection>,
) -> ProductResult<Json<ProductEnvelope>> {
    let product = service.get_product(&path_id(id)?).await?;
    Ok(Json(ProductEnvelope {
        product: product.into(),
    }))
}

/// Update a product
///
/// Only fields present and non-null in the body are changed.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex characters)")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductChange),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    id: Result<Path<String>, PathRejection>,
    ValidatedFields(input): ValidatedFields<UpdateProduct>,
) -> ProductResult<Json<ProductChange>> {
    let product = service.update_product(&path_id(id)?, input).await?;
    Ok(Json(ProductChange {
        msg: UPDATED_MSG.to_string(),
        product: product.into(),
    }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = ProductChange),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    id: Result<Path<String>, PathRejection>,
) -> ProductResult<Json<ProductChange>> {
    let product = service.delete_product(&path_id(id)?).await?;
    Ok(Json(ProductChange {
        msg: DELETED_MSG.to_string(),
        product: product.into(),
    }))
}
