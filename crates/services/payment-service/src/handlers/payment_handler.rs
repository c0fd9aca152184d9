//! Payment handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use common::{AppResult, ValidatedJson};
use domain::Payment;

use crate::state::AppState;

/// Payment creation request with validation.
///
/// Status is never accepted from the caller; processing stamps it.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(range(min = 1, message = "User id must be positive"))]
    pub user_id: i64,
    pub amount: Decimal,
    #[validate(length(min = 1, message = "Currency cannot be empty"))]
    pub currency: String,
    #[validate(length(min = 1, message = "Payment method cannot be empty"))]
    pub payment_method: String,
}

/// Payment update request; PUT overwrites every mutable field.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdateRequest {
    pub amount: Decimal,
    #[validate(length(min = 1, message = "Currency cannot be empty"))]
    pub currency: String,
    #[validate(length(min = 1, message = "Status cannot be empty"))]
    pub status: String,
    #[validate(length(min = 1, message = "Payment method cannot be empty"))]
    pub payment_method: String,
}

/// Create payment routes.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route(
            "/:id",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .route("/user/:user_id", get(get_payments_by_user))
        .route("/status/:status", get(get_payments_by_status))
}

/// Get all payments.
pub async fn list_payments(State(state): State<AppState>) -> AppResult<Json<Vec<Payment>>> {
    let payments = state.payment_service.list_payments().await?;
    Ok(Json(payments))
}

/// Get payment by ID.
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Payment>> {
    let payment = state.payment_service.get_payment(id).await?;
    Ok(Json(payment))
}

/// Get all payments for a user.
pub async fn get_payments_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = state.payment_service.get_payments_by_user(user_id).await?;
    Ok(Json(payments))
}

/// Get all payments with a given status.
pub async fn get_payments_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = state
        .payment_service
        .get_payments_by_status(&status)
        .await?;
    Ok(Json(payments))
}

/// Process a new payment.
pub async fn create_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PaymentRequest>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let payment = state
        .payment_service
        .process_payment(
            payload.user_id,
            payload.amount,
            payload.currency,
            payload.payment_method,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Update an existing payment.
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<PaymentUpdateRequest>,
) -> AppResult<Json<Payment>> {
    let payment = state
        .payment_service
        .update_payment(
            id,
            payload.amount,
            payload.currency,
            payload.status,
            payload.payment_method,
        )
        .await?;
    Ok(Json(payment))
}

/// Delete a payment.
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.payment_service.delete_payment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
