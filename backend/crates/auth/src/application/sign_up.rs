//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::Username;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub username: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate user name
        let username =
            Username::new(&input.username).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Check if user name is taken
        if self.repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Persist; the unique index backs the existence check against races
        let user = User::new(username, input.email, password_hash);
        self.repo.create(&user).await?;

        tracing::info!(username = %user.username, "User signed up");

        Ok(SignUpOutput {
            username: user.username.original().to_string(),
        })
    }
}
