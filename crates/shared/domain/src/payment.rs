//! Payment entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment record managed by the payment service.
///
/// `transaction_id`, `created_at` and `status` are assigned server-side
/// when the payment is processed; client-supplied values are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub transaction_id: String,
    pub user_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub status: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}
