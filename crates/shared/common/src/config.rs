//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// JWT configuration for the auth service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    /// Token issuer embedded in the claims
    pub issuer: String,
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: "https://example.com/issuer".to_string(),
            expiration_hours: 24,
        }
    }
}
