//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::Username;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                username,
                username_canonical,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.username.original())
        .bind(user.username.canonical())
        .bind(&user.email)
        .bind(user.password_hash.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // A concurrent signup can slip past the existence check; the
            // unique index on username_canonical is authoritative
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::UsernameTaken)
            }
            Err(e) => Err(AuthError::Database(e)),
        }
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                username,
                email,
                password_hash,
                created_at
            FROM users
            WHERE username_canonical = $1
            "#,
        )
        .bind(username.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username_canonical = $1)",
        )
        .bind(username.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

/// Database row for the users table
#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let username = Username::new(&self.username)
            .map_err(|e| AuthError::Internal(format!("Corrupt username in store: {e}")))?;
        let password_hash = HashedPassword::from_phc(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Corrupt password hash in store: {e}")))?;

        Ok(User {
            username,
            email: self.email,
            password_hash,
            created_at: self.created_at,
        })
    }
}
