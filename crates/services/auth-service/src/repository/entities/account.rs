//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Account;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub active: bool,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            id: model.id,
            username: model.username,
            password: model.password,
            email: model.email,
            active: model.active,
            role: model.role,
        }
    }
}
