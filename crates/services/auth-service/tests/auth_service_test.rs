//! Auth service unit tests.

use std::sync::Arc;

use jsonwebtoken::{decode, DecodingKey, Validation};
use mockall::predicate::eq;

use auth_service_lib::repository::MockAccountRepository;
use auth_service_lib::service::{AuthService, Authenticator, Claims};
use common::{AppError, JwtConfig};
use domain::Account;

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        issuer: "https://example.com/issuer".to_string(),
        expiration_hours: 24,
    }
}

fn test_account(username: &str, password: &str) -> Account {
    Account {
        id: 1,
        username: username.to_string(),
        password: password.to_string(),
        email: None,
        active: true,
        role: "USER".to_string(),
    }
}

#[tokio::test]
async fn register_new_username_creates_account() {
    let mut repo = MockAccountRepository::new();
    repo.expect_find_by_username()
        .with(eq("alice"))
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(|username, password| username == "alice" && password == "secret")
        .times(1)
        .returning(|username, password| Ok(test_account(&username, &password)));

    let service = Authenticator::new(Arc::new(repo), jwt_config());
    let result = service
        .register("alice".to_string(), "secret".to_string())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn register_duplicate_username_conflicts() {
    let mut repo = MockAccountRepository::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(test_account("alice", "secret"))));

    let service = Authenticator::new(Arc::new(repo), jwt_config());
    let result = service
        .register("alice".to_string(), "other".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn login_with_correct_credentials_returns_signed_token() {
    let mut repo = MockAccountRepository::new();
    repo.expect_find_by_username()
        .with(eq("alice"))
        .returning(|_| Ok(Some(test_account("alice", "secret"))));

    let service = Authenticator::new(Arc::new(repo), jwt_config());
    let response = service
        .login("alice".to_string(), "secret".to_string())
        .await
        .unwrap();

    assert_eq!(response.username, "alice");
    assert_eq!(response.role, "USER");

    // The token's claims carry the stored username and role
    let mut validation = Validation::default();
    validation.set_issuer(&["https://example.com/issuer"]);
    let token_data = decode::<Claims>(
        &response.token,
        &DecodingKey::from_secret(b"test-secret"),
        &validation,
    )
    .unwrap();

    assert_eq!(token_data.claims.sub, "alice");
    assert_eq!(token_data.claims.role, "USER");
    assert!(token_data.claims.exp > token_data.claims.iat);
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let mut repo = MockAccountRepository::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(test_account("alice", "secret"))));

    let service = Authenticator::new(Arc::new(repo), jwt_config());
    let result = service.login("alice".to_string(), "wrong".to_string()).await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn login_with_unknown_username_is_rejected() {
    let mut repo = MockAccountRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let service = Authenticator::new(Arc::new(repo), jwt_config());
    let result = service.login("ghost".to_string(), "secret".to_string()).await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn validate_token_is_a_presence_check() {
    let service = Authenticator::new(Arc::new(MockAccountRepository::new()), jwt_config());

    assert!(service.validate_token(Some("Bearer abc")));
    assert!(!service.validate_token(Some("abc")));
    assert!(!service.validate_token(None));
}
