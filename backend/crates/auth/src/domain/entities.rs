//! Auth Entities

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_objects::Username;

/// User account
///
/// Created at signup, immutable thereafter, never deleted in scope.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique handle (uniqueness on the canonical form)
    pub username: Username,
    /// Contact email, plays no role in authentication
    pub email: String,
    /// Argon2id PHC hash
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: Username, email: String, password_hash: HashedPassword) -> Self {
        Self {
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
