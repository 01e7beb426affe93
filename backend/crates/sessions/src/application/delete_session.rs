//! Delete Session Use Case
//!
//! Ownership-scoped delete; deleting twice fails the second time
//! (idempotent-failure, not idempotent-success).

use std::sync::Arc;

use auth::Identity;
use kernel::id::SessionId;

use crate::domain::repository::SessionRepository;
use crate::error::{SessionError, SessionResult};

/// Delete session use case
pub struct DeleteSessionUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteSessionUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, session_id: SessionId, identity: &Identity) -> SessionResult<()> {
        let deleted = self.repo.delete(session_id, &identity.username).await?;

        if !deleted {
            return Err(SessionError::NotFound);
        }

        tracing::info!(
            session_id = %session_id,
            username = %identity.username,
            "Session deleted"
        );

        Ok(())
    }
}
