//! Payment repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::payment::{self, ActiveModel, Entity as PaymentEntity};
use common::{AppError, AppResult};
use domain::Payment;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields persisted for a new payment; generated fields are stamped by
/// the service before the draft reaches the repository.
#[derive(Debug, Clone)]
pub struct PaymentDraft {
    pub transaction_id: String,
    pub user_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub status: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}

/// Payment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find payment by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Payment>>;

    /// Find all payments for a user
    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<Payment>>;

    /// Find all payments with a given status
    async fn find_by_status(&self, status: &str) -> AppResult<Vec<Payment>>;

    /// List all payments
    async fn list(&self) -> AppResult<Vec<Payment>>;

    /// Persist a new payment
    async fn create(&self, draft: PaymentDraft) -> AppResult<Payment>;

    /// Overwrite the mutable fields of an existing payment
    async fn update(
        &self,
        id: i64,
        amount: Decimal,
        currency: String,
        status: String,
        payment_method: String,
    ) -> AppResult<Payment>;

    /// Delete payment by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of PaymentRepository backed by SeaORM.
pub struct PaymentStore {
    db: DatabaseConnection,
}

impl PaymentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepository for PaymentStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Payment>> {
        let result = PaymentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Payment::from))
    }

    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<Payment>> {
        let models = PaymentEntity::find()
            .filter(payment::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Payment::from).collect())
    }

    async fn find_by_status(&self, status: &str) -> AppResult<Vec<Payment>> {
        let models = PaymentEntity::find()
            .filter(payment::Column::Status.eq(status))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Payment::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Payment>> {
        let models = PaymentEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Payment::from).collect())
    }

    async fn create(&self, draft: PaymentDraft) -> AppResult<Payment> {
        let active_model = ActiveModel {
            transaction_id: Set(draft.transaction_id),
            user_id: Set(draft.user_id),
            amount: Set(draft.amount),
            currency: Set(draft.currency),
            status: Set(draft.status),
            payment_method: Set(draft.payment_method),
            created_at: Set(draft.created_at),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Payment::from(model))
    }

    async fn update(
        &self,
        id: i64,
        amount: Decimal,
        currency: String,
        status: String,
        payment_method: String,
    ) -> AppResult<Payment> {
        let payment = PaymentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = payment.into();
        active.amount = Set(amount);
        active.currency = Set(currency);
        active.status = Set(status);
        active.payment_method = Set(payment_method);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Payment::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = PaymentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
