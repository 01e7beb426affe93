//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entities::User;
use crate::domain::value_objects::Username;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    ///
    /// A concurrent signup race on the same canonical username must
    /// surface as [`crate::AuthError::UsernameTaken`], not a bare
    /// database error.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find a user by username (canonical match)
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>>;

    /// Check whether a username is already registered
    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool>;
}
