//! Authentication service - registration, login and token checks.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use common::{AppError, AppResult, JwtConfig};
use domain::{Account, BEARER_TOKEN_PREFIX};

use crate::repository::AccountRepository;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
}

/// Response returned after successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub role: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account
    async fn register(&self, username: String, password: String) -> AppResult<()>;

    /// Login and return a signed token with the account's username and role
    async fn login(&self, username: String, password: String) -> AppResult<AuthResponse>;

    /// Check a token for presence of the Bearer scheme marker.
    ///
    /// Performs no cryptographic verification; this stub is not a
    /// security boundary.
    fn validate_token(&self, token: Option<&str>) -> bool;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    repo: Arc<dyn AccountRepository>,
    jwt: JwtConfig,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(repo: Arc<dyn AccountRepository>, jwt: JwtConfig) -> Self {
        Self { repo, jwt }
    }

    /// Generate a signed JWT for an account
    fn generate_token(&self, account: &Account) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.jwt.expiration_hours);

        let claims = Claims {
            sub: account.username.clone(),
            role: account.role.clone(),
            iss: self.jwt.issuer.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt.secret.as_bytes()),
        )?;

        Ok(token)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, username: String, password: String) -> AppResult<()> {
        if self.repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username"));
        }

        self.repo.create(username, password).await?;
        Ok(())
    }

    async fn login(&self, username: String, password: String) -> AppResult<AuthResponse> {
        let account = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Exact compare against the stored plaintext password
        if !account.password_matches(&password) {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.generate_token(&account)?;

        Ok(AuthResponse {
            token,
            username: account.username,
            role: account.role,
        })
    }

    fn validate_token(&self, token: Option<&str>) -> bool {
        token.is_some_and(|t| t.starts_with(BEARER_TOKEN_PREFIX))
    }
}
