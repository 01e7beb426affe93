//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::GymId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Gym;
use crate::domain::repository::GymRepository;
use crate::error::{GymError, GymResult};

/// PostgreSQL-backed gym repository
#[derive(Clone)]
pub struct PgGymRepository {
    pool: PgPool,
}

impl PgGymRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl GymRepository for PgGymRepository {
    async fn create(&self, gym: &Gym) -> GymResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO gyms (
                gym_id,
                name,
                location,
                setting_style,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(gym.gym_id.as_uuid())
        .bind(&gym.name)
        .bind(&gym.location)
        .bind(&gym.setting_style)
        .bind(gym.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // Unique index on (location, setting_style)
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(GymError::DuplicateGym)
            }
            Err(e) => Err(GymError::Database(e)),
        }
    }

    async fn list(&self) -> GymResult<Vec<Gym>> {
        let rows = sqlx::query_as::<_, GymRow>(
            r#"
            SELECT
                gym_id,
                name,
                location,
                setting_style,
                created_at
            FROM gyms
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GymRow::into_gym).collect())
    }
}

/// Database row for the gyms table
#[derive(sqlx::FromRow)]
struct GymRow {
    gym_id: Uuid,
    name: String,
    location: String,
    setting_style: String,
    created_at: DateTime<Utc>,
}

impl GymRow {
    fn into_gym(self) -> Gym {
        Gym {
            gym_id: GymId::from_uuid(self.gym_id),
            name: self.name,
            location: self.location,
            setting_style: self.setting_style,
            created_at: self.created_at,
        }
    }
}
