//! User service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use broker::MockEventPublisher;
use common::AppError;
use domain::{User, USER_CREATED_KEY, USER_UPDATED_KEY};
use user_service_lib::repository::MockUserRepository;
use user_service_lib::service::{UserManager, UserService};

fn test_user(id: i64) -> User {
    User {
        id,
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        full_name: "John Doe".to_string(),
    }
}

#[tokio::test]
async fn get_user_returns_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(42))
        .returning(|id| Ok(Some(test_user(id))));

    let service = UserManager::new(Arc::new(repo), Arc::new(MockEventPublisher::new()));
    let user = service.get_user(42).await.unwrap();

    assert_eq!(user.id, 42);
    assert_eq!(user.username, "jdoe");
}

#[tokio::test]
async fn get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo), Arc::new(MockEventPublisher::new()));
    let result = service.get_user(1).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn create_user_publishes_created_event() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .returning(|username, email, full_name| {
            Ok(User {
                id: 7,
                username,
                email,
                full_name,
            })
        });

    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .withf(|key, payload| key == USER_CREATED_KEY && payload["id"] == 7)
        .times(1)
        .returning(|_, _| Ok(()));

    let service = UserManager::new(Arc::new(repo), Arc::new(publisher));
    let user = service
        .create_user(
            "jdoe".to_string(),
            "jdoe@example.com".to_string(),
            "John Doe".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(user.id, 7);
}

#[tokio::test]
async fn update_user_publishes_updated_event() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .returning(|id, username, email, full_name| {
            Ok(User {
                id,
                username,
                email,
                full_name,
            })
        });

    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .withf(|key, _| key == USER_UPDATED_KEY)
        .times(1)
        .returning(|_, _| Ok(()));

    let service = UserManager::new(Arc::new(repo), Arc::new(publisher));
    let user = service
        .update_user(
            3,
            "jdoe".to_string(),
            "new@example.com".to_string(),
            "John Doe".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
}

#[tokio::test]
async fn update_missing_user_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .returning(|_, _, _, _| Err(AppError::NotFound));

    // No publish expected when the update fails
    let publisher = MockEventPublisher::new();

    let service = UserManager::new(Arc::new(repo), Arc::new(publisher));
    let result = service
        .update_user(
            99,
            "x".to_string(),
            "x@example.com".to_string(),
            "X".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn delete_missing_user_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let service = UserManager::new(Arc::new(repo), Arc::new(MockEventPublisher::new()));
    let result = service.delete_user(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
