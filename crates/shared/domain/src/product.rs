//! Product entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product record managed by the product service.
///
/// `stock_quantity` is adjusted by the stock endpoint and by consumed
/// order events. Adjustments are unsynchronized read-modify-write, so
/// concurrent decrements on the same product can race.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
}
