//! Start Session Use Case
//!
//! Creates a new active session owned by the caller. Always succeeds
//! for a valid identity; the gym id is taken as given.

use std::sync::Arc;

use auth::Identity;
use kernel::id::SessionId;

use crate::domain::entities::ClimbSession;
use crate::domain::repository::SessionRepository;
use crate::error::SessionResult;

/// Start session use case
pub struct StartSessionUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
}

impl<R> StartSessionUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, gym_id: String, identity: &Identity) -> SessionResult<SessionId> {
        let session = ClimbSession::start(identity.username.clone(), gym_id);

        self.repo.create(&session).await?;

        tracing::info!(
            session_id = %session.session_id,
            username = %session.username,
            gym_id = %session.gym_id,
            "Session started"
        );

        Ok(session.session_id)
    }
}
