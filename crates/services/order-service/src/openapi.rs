//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::order_handler::{OrderItemRequest, OrderRequest};
use domain::{Order, OrderItem};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::order_handler::list_orders,
        crate::handlers::order_handler::get_order,
        crate::handlers::order_handler::get_orders_by_user,
        crate::handlers::order_handler::get_orders_by_status,
        crate::handlers::order_handler::create_order,
        crate::handlers::order_handler::update_order_status,
        crate::handlers::order_handler::delete_order,
    ),
    components(
        schemas(Order, OrderItem, OrderRequest, OrderItemRequest)
    ),
    tags(
        (name = "Orders", description = "Order management endpoints"),
    )
)]
pub struct ApiDoc;
