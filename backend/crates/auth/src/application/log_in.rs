//! Log In Use Case
//!
//! Authenticates a user and issues a bearer token.
//!
//! Every failure path before the final token issue collapses into
//! [`AuthError::InvalidCredentials`] so callers cannot distinguish an
//! unknown username from a wrong password.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::{self, Claims};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::Username;
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub username: String,
    pub password: String,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    /// Signed bearer token carrying the username claim
    pub access_token: String,
}

/// Log in use case
pub struct LogInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LogInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let username =
            Username::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let password_valid = user
            .password_hash
            .verify(&password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims::for_username(user.username.original(), self.config.token_ttl_secs());
        let access_token = token::issue(&claims, &self.config.token_secret)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(username = %user.username, "User logged in");

        Ok(LogInOutput { access_token })
    }
}
