//! Authentication account entity.

use serde::{Deserialize, Serialize};

/// Account registered with the auth service.
///
/// Passwords are stored as given and compared exactly, not hashed.
/// This is a stub, not a real security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub email: Option<String>,
    pub active: bool,
    pub role: String,
}

impl Account {
    /// Exact-compare the stored password against a candidate.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
