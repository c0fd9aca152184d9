//! Order repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::{order, order_item};
use common::{AppError, AppResult};
use domain::{Order, OrderItem};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields persisted for a new order; status and creation time are
/// stamped by the service before the draft reaches the repository.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub user_id: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDraft>,
}

/// Line item inside an order draft.
#[derive(Debug, Clone)]
pub struct OrderItemDraft {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// Order repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find order by ID, items included
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>>;

    /// Find all orders for a user
    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<Order>>;

    /// Find all orders with a given status
    async fn find_by_status(&self, status: &str) -> AppResult<Vec<Order>>;

    /// List all orders
    async fn list(&self) -> AppResult<Vec<Order>>;

    /// Persist a new order together with its items
    async fn create(&self, draft: OrderDraft) -> AppResult<Order>;

    /// Overwrite the status of an existing order
    async fn update_status(&self, id: i64, status: String) -> AppResult<Order>;

    /// Delete order by ID; items go with it
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of OrderRepository backed by SeaORM.
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn assemble(model: order::Model, items: Vec<order_item::Model>) -> Order {
        Order {
            id: model.id,
            user_id: model.user_id,
            status: model.status,
            total_amount: model.total_amount,
            created_at: model.created_at,
            items: items.into_iter().map(OrderItem::from).collect(),
        }
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Order>> {
        let result = order::Entity::find_by_id(id)
            .find_with_related(order_item::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result
            .into_iter()
            .next()
            .map(|(model, items)| Self::assemble(model, items)))
    }

    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<Order>> {
        let result = order::Entity::find()
            .filter(order::Column::UserId.eq(user_id))
            .find_with_related(order_item::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result
            .into_iter()
            .map(|(model, items)| Self::assemble(model, items))
            .collect())
    }

    async fn find_by_status(&self, status: &str) -> AppResult<Vec<Order>> {
        let result = order::Entity::find()
            .filter(order::Column::Status.eq(status))
            .find_with_related(order_item::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result
            .into_iter()
            .map(|(model, items)| Self::assemble(model, items))
            .collect())
    }

    async fn list(&self) -> AppResult<Vec<Order>> {
        let result = order::Entity::find()
            .find_with_related(order_item::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result
            .into_iter()
            .map(|(model, items)| Self::assemble(model, items))
            .collect())
    }

    async fn create(&self, draft: OrderDraft) -> AppResult<Order> {
        let order_model = order::ActiveModel {
            user_id: Set(draft.user_id),
            status: Set(draft.status),
            total_amount: Set(draft.total_amount),
            created_at: Set(draft.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        let mut items = Vec::with_capacity(draft.items.len());
        for item in draft.items {
            let item_model = order_item::ActiveModel {
                order_id: Set(order_model.id),
                product_id: Set(item.product_id),
                product_name: Set(item.product_name),
                quantity: Set(item.quantity),
                price: Set(item.price),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
            items.push(item_model);
        }

        Ok(Self::assemble(order_model, items))
    }

    async fn update_status(&self, id: i64, status: String) -> AppResult<Order> {
        let model = order::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: order::ActiveModel = model.into();
        active.status = Set(status);
        let model = active.update(&self.db).await.map_err(AppError::from)?;

        let items = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(model.id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Self::assemble(model, items))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = order::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
