//! Payment service - processing stamps the server-generated fields.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Payment, PAYMENT_STATUS_PROCESSED};

use crate::repository::{PaymentDraft, PaymentRepository};

/// Payment service trait for dependency injection.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Get payment by ID
    async fn get_payment(&self, id: i64) -> AppResult<Payment>;

    /// Get all payments for a user
    async fn get_payments_by_user(&self, user_id: i64) -> AppResult<Vec<Payment>>;

    /// Get all payments with a given status
    async fn get_payments_by_status(&self, status: &str) -> AppResult<Vec<Payment>>;

    /// List all payments
    async fn list_payments(&self) -> AppResult<Vec<Payment>>;

    /// Process a payment: stamps transaction id, creation time and the
    /// PROCESSED status before persisting.
    async fn process_payment(
        &self,
        user_id: i64,
        amount: Decimal,
        currency: String,
        payment_method: String,
    ) -> AppResult<Payment>;

    /// Overwrite the mutable fields of an existing payment
    async fn update_payment(
        &self,
        id: i64,
        amount: Decimal,
        currency: String,
        status: String,
        payment_method: String,
    ) -> AppResult<Payment>;

    /// Delete payment by ID
    async fn delete_payment(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of PaymentService.
pub struct PaymentManager {
    repo: Arc<dyn PaymentRepository>,
}

impl PaymentManager {
    /// Create new payment service instance
    pub fn new(repo: Arc<dyn PaymentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PaymentService for PaymentManager {
    async fn get_payment(&self, id: i64) -> AppResult<Payment> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn get_payments_by_user(&self, user_id: i64) -> AppResult<Vec<Payment>> {
        self.repo.find_by_user_id(user_id).await
    }

    async fn get_payments_by_status(&self, status: &str) -> AppResult<Vec<Payment>> {
        self.repo.find_by_status(status).await
    }

    async fn list_payments(&self) -> AppResult<Vec<Payment>> {
        self.repo.list().await
    }

    async fn process_payment(
        &self,
        user_id: i64,
        amount: Decimal,
        currency: String,
        payment_method: String,
    ) -> AppResult<Payment> {
        let draft = PaymentDraft {
            transaction_id: Uuid::new_v4().to_string(),
            user_id,
            amount,
            currency,
            status: PAYMENT_STATUS_PROCESSED.to_string(),
            payment_method,
            created_at: Utc::now(),
        };

        self.repo.create(draft).await
    }

    async fn update_payment(
        &self,
        id: i64,
        amount: Decimal,
        currency: String,
        status: String,
        payment_method: String,
    ) -> AppResult<Payment> {
        self.repo
            .update(id, amount, currency, status, payment_method)
            .await
    }

    async fn delete_payment(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
