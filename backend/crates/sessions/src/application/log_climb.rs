//! Log Climb Use Case
//!
//! Appends a climb to one of the caller's active sessions. When the
//! ownership-scoped write matches zero records this reports NotFound
//! rather than silently succeeding.

use std::sync::Arc;

use auth::Identity;
use chrono::{DateTime, Utc};
use kernel::id::SessionId;

use crate::domain::entities::Climb;
use crate::domain::repository::SessionRepository;
use crate::error::{SessionError, SessionResult};

/// Log climb input
pub struct LogClimbInput {
    pub grade: String,
    pub hold_type: String,
    pub angle: String,
    pub result: String,
    /// Defaults to now when absent
    pub timestamp: Option<DateTime<Utc>>,
}

/// Log climb use case
pub struct LogClimbUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
}

impl<R> LogClimbUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        session_id: SessionId,
        input: LogClimbInput,
        identity: &Identity,
    ) -> SessionResult<()> {
        let climb = Climb::new(
            input.grade,
            input.hold_type,
            input.angle,
            input.result,
            input.timestamp,
        );

        let matched = self
            .repo
            .append_climb(session_id, &identity.username, &climb)
            .await?;

        if !matched {
            return Err(SessionError::NotFound);
        }

        tracing::debug!(
            session_id = %session_id,
            username = %identity.username,
            result = %climb.result,
            "Climb logged"
        );

        Ok(())
    }
}
