//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{delete, get},
};
use axum_helpers::auth::{RoleGuard, require_any_role};
use std::sync::Arc;

use crate::error::ProductResult;
use crate::models::{CreateProductDto, ProductDto, UpdateProductDto};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::ValidatedJson;

/// Base path of the products resource
pub const PRODUCTS_PATH: &str = "/api/v1/products";

/// Products router.
///
/// The collection is served both with and without the trailing slash.
/// `DELETE /{id}` goes through `guard` before reaching the service.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    guard: RoleGuard,
) -> Router {
    let shared_service = Arc::new(service);

    let collection = get(list_products)
        .post(create_product)
        .put(update_product);

    let member = get(get_product).merge(
        delete(delete_product).route_layer(from_fn_with_state(guard, require_any_role)),
    );

    Router::new()
        .route(&format!("{PRODUCTS_PATH}/"), collection.clone())
        .route(PRODUCTS_PATH, collection)
        .route(&format!("{PRODUCTS_PATH}/{{id}}"), member)
        .with_state(shared_service)
}

async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = service.list_all().await?;
    Ok(Json(products))
}

async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductDto>> {
    let product = service.get_by_id(&id).await?;
    Ok(Json(product))
}

/// 201 with a `Location` header pointing at the new product
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProductDto>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(input).await?;
    let location = format!("{PRODUCTS_PATH}/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateProductDto>,
) -> ProductResult<Json<ProductDto>> {
    let product = service.update(input).await?;
    Ok(Json(product))
}

async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<StatusCode> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
