//! Account repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use common::{AppError, AppResult};
use domain::{Account, ROLE_USER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// Create a new active account with the default role
    async fn create(&self, username: String, password: String) -> AppResult<Account>;
}

/// Concrete implementation of AccountRepository backed by SeaORM.
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn create(&self, username: String, password: String) -> AppResult<Account> {
        // Password stored as given, no hashing
        let active_model = ActiveModel {
            username: Set(username),
            password: Set(password),
            email: Set(None),
            active: Set(true),
            role: Set(ROLE_USER.to_string()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Account::from(model))
    }
}
