//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::product_handler::ProductRequest;
use domain::Product;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::get_products_by_category,
        crate::handlers::product_handler::search_products,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::update_product,
        crate::handlers::product_handler::adjust_stock,
        crate::handlers::product_handler::delete_product,
    ),
    components(
        schemas(Product, ProductRequest)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;
