//! PostgreSQL Repository Implementations
//!
//! Climbs live in a JSONB array column on the session row, so an append
//! is a single `UPDATE ... SET climbs = climbs || $climb` with the
//! ownership filter in the WHERE clause. The same shape applies to the
//! end transition: duration is computed inside the statement, there is
//! no read-modify-write anywhere.

use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{Climb, ClimbSession, SessionStatus};
use crate::domain::repository::SessionRepository;
use crate::error::{SessionError, SessionResult};

/// PostgreSQL-backed session repository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionRepository for PgSessionRepository {
    async fn create(&self, session: &ClimbSession) -> SessionResult<()> {
        sqlx::query(
            r#"
            INSERT INTO climb_sessions (
                session_id,
                username,
                gym_id,
                start_time,
                end_time,
                duration_minutes,
                fatigue_level,
                climbs,
                status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(&session.username)
        .bind(&session.gym_id)
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.duration_minutes)
        .bind(session.fatigue_level)
        .bind(Json(&session.climbs))
        .bind(session.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn append_climb(
        &self,
        session_id: SessionId,
        owner: &str,
        climb: &Climb,
    ) -> SessionResult<bool> {
        // jsonb array || jsonb object appends the object
        let affected = sqlx::query(
            r#"
            UPDATE climb_sessions
            SET climbs = climbs || $3
            WHERE session_id = $1
              AND username = $2
              AND status = 'active'
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(owner)
        .bind(Json(climb))
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn finish(
        &self,
        session_id: SessionId,
        owner: &str,
        ended_at: DateTime<Utc>,
        fatigue_level: i16,
    ) -> SessionResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE climb_sessions
            SET end_time = $3,
                duration_minutes = ROUND(
                    (EXTRACT(EPOCH FROM ($3 - start_time)) / 60.0)::numeric, 2
                )::double precision,
                fatigue_level = $4,
                status = 'completed'
            WHERE session_id = $1
              AND username = $2
              AND status = 'active'
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(owner)
        .bind(ended_at)
        .bind(fatigue_level)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn history_for(&self, owner: &str) -> SessionResult<Vec<ClimbSession>> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                username,
                gym_id,
                start_time,
                end_time,
                duration_minutes,
                fatigue_level,
                climbs,
                status
            FROM climb_sessions
            WHERE username = $1
            ORDER BY start_time DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SessionRow::into_session).collect()
    }

    async fn delete(&self, session_id: SessionId, owner: &str) -> SessionResult<bool> {
        let affected = sqlx::query(
            r#"
            DELETE FROM climb_sessions
            WHERE session_id = $1
              AND username = $2
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(owner)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }
}

/// Database row for the climb_sessions table
#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    username: String,
    gym_id: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    duration_minutes: Option<f64>,
    fatigue_level: Option<i16>,
    climbs: Json<Vec<Climb>>,
    status: String,
}

impl SessionRow {
    fn into_session(self) -> SessionResult<ClimbSession> {
        let status = SessionStatus::from_db(&self.status).ok_or_else(|| {
            SessionError::Internal(format!("Corrupt session status in store: {}", self.status))
        })?;

        Ok(ClimbSession {
            session_id: SessionId::from_uuid(self.session_id),
            username: self.username,
            gym_id: self.gym_id,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_minutes: self.duration_minutes,
            fatigue_level: self.fatigue_level,
            climbs: self.climbs.0,
            status,
        })
    }
}
