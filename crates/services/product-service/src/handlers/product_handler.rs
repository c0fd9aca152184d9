//! Product handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppResult, ValidatedJson};
use domain::Product;

use crate::repository::ProductDraft;
use crate::state::AppState;

/// Product create/update request with validation.
///
/// PUT overwrites every mutable field, matching the POST body shape.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Mechanical Keyboard")]
    pub name: String,
    #[schema(example = "Tenkeyless, hot-swappable switches")]
    pub description: Option<String>,
    #[schema(example = "29.99")]
    pub price: Decimal,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 25)]
    pub stock_quantity: i32,
    #[schema(example = "peripherals")]
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        ProductDraft {
            name: request.name,
            description: request.description,
            price: request.price,
            stock_quantity: request.stock_quantity,
            category: request.category,
            image_url: request.image_url,
        }
    }
}

/// Name fragment for catalog search.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    pub name: String,
}

/// Signed stock delta for stock adjustment.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StockQuery {
    pub quantity: i32,
}

/// Create product routes.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/stock", patch(adjust_stock))
        .route("/category/:category", get(get_products_by_category))
        .route("/search", get(search_products))
}

/// Get all products.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = [Product])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

/// Get product by ID.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

/// Get all products in a category.
#[utoipa::path(
    get,
    path = "/api/products/category/{category}",
    tag = "Products",
    params(("category" = String, Path, description = "Product category")),
    responses(
        (status = 200, description = "Products in the category", body = [Product])
    )
)]
pub async fn get_products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state
        .product_service
        .get_products_by_category(&category)
        .await?;
    Ok(Json(products))
}

/// Search products by name fragment.
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Products matching the name", body = [Product])
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.search_products(&query.name).await?;
    Ok(Json(products))
}

/// Create a new product.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation failure")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.product_service.create_product(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update an existing product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<Json<Product>> {
    let product = state
        .product_service
        .update_product(id, payload.into())
        .await?;
    Ok(Json(product))
}

/// Adjust a product's stock by a signed delta.
#[utoipa::path(
    patch,
    path = "/api/products/{id}/stock",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id"), StockQuery),
    responses(
        (status = 200, description = "Stock adjusted", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn adjust_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StockQuery>,
) -> AppResult<Json<Product>> {
    let product = state
        .product_service
        .adjust_stock(id, query.quantity)
        .await?;
    Ok(Json(product))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
