//! End Session Use Case
//!
//! The one-way `active -> completed` transition. The write is scoped to
//! (id, owner, active) in one statement, so a non-owner's request is
//! indistinguishable from a missing session. The fatigue range (1-10)
//! is the caller's responsibility at this layer.

use std::sync::Arc;

use auth::Identity;
use chrono::Utc;
use kernel::id::SessionId;

use crate::domain::repository::SessionRepository;
use crate::error::{SessionError, SessionResult};

/// End session use case
pub struct EndSessionUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
}

impl<R> EndSessionUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        session_id: SessionId,
        fatigue_level: i16,
        identity: &Identity,
    ) -> SessionResult<()> {
        let matched = self
            .repo
            .finish(session_id, &identity.username, Utc::now(), fatigue_level)
            .await?;

        if !matched {
            return Err(SessionError::NotFound);
        }

        tracing::info!(
            session_id = %session_id,
            username = %identity.username,
            fatigue_level,
            "Session finalized"
        );

        Ok(())
    }
}
