//! Payment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Payment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub transaction_id: String,
    pub user_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub status: String,
    pub payment_method: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Payment {
    fn from(model: Model) -> Self {
        Payment {
            id: model.id,
            transaction_id: model.transaction_id,
            user_id: model.user_id,
            amount: model.amount,
            currency: model.currency,
            status: model.status,
            payment_method: model.payment_method,
            created_at: model.created_at,
        }
    }
}
