//! Domain-level constants.
//!
//! Status values, roles and messaging addresses shared by the services.

// =============================================================================
// Roles
// =============================================================================

/// Default role assigned to newly registered accounts
pub const ROLE_USER: &str = "USER";

// =============================================================================
// Statuses
// =============================================================================

/// Status stamped on every payment at creation time
pub const PAYMENT_STATUS_PROCESSED: &str = "PROCESSED";

/// Initial status of every order
pub const ORDER_STATUS_CREATED: &str = "CREATED";

// =============================================================================
// Authentication
// =============================================================================

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

// =============================================================================
// Messaging
// =============================================================================

/// Exchange carrying order lifecycle events
pub const ORDER_EXCHANGE: &str = "order-exchange";

/// Routing key published when an order is created
pub const ORDER_CREATED_KEY: &str = "order.created";

/// Exchange carrying user lifecycle events
pub const USER_EXCHANGE: &str = "user.exchange";

/// Routing key published when a user is created
pub const USER_CREATED_KEY: &str = "user.created";

/// Routing key published when a user is updated
pub const USER_UPDATED_KEY: &str = "user.updated";

/// Queue bound by the product service to consume order events
pub const PRODUCT_ORDER_QUEUE: &str = "product.order.queue";
