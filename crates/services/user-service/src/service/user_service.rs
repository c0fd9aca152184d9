//! User service - directory CRUD plus lifecycle events.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use broker::EventPublisher;
use common::{AppError, AppResult};
use domain::{User, UserEvent, USER_CREATED_KEY, USER_UPDATED_KEY};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Get user by username
    async fn get_user_by_username(&self, username: &str) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a user and publish `user.created`
    async fn create_user(&self, username: String, email: String, full_name: String)
        -> AppResult<User>;

    /// Overwrite a user's fields and publish `user.updated`
    async fn update_user(
        &self,
        id: i64,
        username: String,
        email: String,
        full_name: String,
    ) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { repo, publisher }
    }

    /// Publish a lifecycle event; publish failures never fail the write.
    async fn publish_event(&self, routing_key: &str, user: &User) {
        let payload = match serde_json::to_value(UserEvent::from(user)) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(routing_key, "failed to encode user event: {}", e);
                return;
            }
        };

        if let Err(e) = self.publisher.publish(routing_key, payload).await {
            warn!(routing_key, "failed to publish user event: {}", e);
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(
        &self,
        username: String,
        email: String,
        full_name: String,
    ) -> AppResult<User> {
        let user = self.repo.create(username, email, full_name).await?;

        self.publish_event(USER_CREATED_KEY, &user).await;

        Ok(user)
    }

    async fn update_user(
        &self,
        id: i64,
        username: String,
        email: String,
        full_name: String,
    ) -> AppResult<User> {
        let user = self.repo.update(id, username, email, full_name).await?;

        self.publish_event(USER_UPDATED_KEY, &user).await;

        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
