//! Unit tests for the auth use cases, backed by an in-memory repository.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use platform::token;

use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
use crate::application::config::AuthConfig;
use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::Username;
use crate::error::{AuthError, AuthResult};

/// In-memory user repository keyed by canonical username
#[derive(Clone, Default)]
struct MemUserRepository {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl UserRepository for MemUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.username.canonical()) {
            return Err(AuthError::UsernameTaken);
        }
        users.insert(user.username.canonical().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(username.canonical()).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool> {
        Ok(self.users.lock().unwrap().contains_key(username.canonical()))
    }
}

fn setup() -> (Arc<MemUserRepository>, Arc<AuthConfig>) {
    (
        Arc::new(MemUserRepository::default()),
        Arc::new(AuthConfig::with_random_secret()),
    )
}

fn signup_input(username: &str, password: &str) -> SignUpInput {
    SignUpInput {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_signup_then_duplicate_fails() {
    let (repo, config) = setup();
    let use_case = SignUpUseCase::new(repo, config);

    use_case
        .execute(signup_input("alice", "correct horse battery"))
        .await
        .unwrap();

    let err = use_case
        .execute(signup_input("alice", "another password!"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UsernameTaken));
}

#[tokio::test]
async fn test_signup_duplicate_is_case_insensitive() {
    let (repo, config) = setup();
    let use_case = SignUpUseCase::new(repo, config);

    use_case
        .execute(signup_input("Alice", "correct horse battery"))
        .await
        .unwrap();

    let err = use_case
        .execute(signup_input("ALICE", "another password!"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UsernameTaken));
}

#[tokio::test]
async fn test_signup_rejects_weak_password() {
    let (repo, config) = setup();
    let use_case = SignUpUseCase::new(repo, config);

    let err = use_case.execute(signup_input("alice", "short")).await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let (repo, config) = setup();

    SignUpUseCase::new(repo.clone(), config.clone())
        .execute(signup_input("alice", "correct horse battery"))
        .await
        .unwrap();

    let output = LogInUseCase::new(repo, config.clone())
        .execute(LogInInput {
            username: "alice".to_string(),
            password: "correct horse battery".to_string(),
        })
        .await
        .unwrap();

    let claims = token::verify(&output.access_token, &config.token_secret).unwrap();
    assert_eq!(claims.username, "alice");
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let (repo, config) = setup();

    SignUpUseCase::new(repo.clone(), config.clone())
        .execute(signup_input("alice", "correct horse battery"))
        .await
        .unwrap();

    let use_case = LogInUseCase::new(repo, config);

    // Wrong password for a known user
    let wrong_password = use_case
        .execute(LogInInput {
            username: "alice".to_string(),
            password: "wrong password!!".to_string(),
        })
        .await
        .unwrap_err();

    // Unknown user entirely
    let unknown_user = use_case
        .execute(LogInInput {
            username: "nobody".to_string(),
            password: "whatever password".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_user, AuthError::InvalidCredentials));
    // Identical external signal, no username enumeration
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}
