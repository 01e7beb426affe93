//! Session History Use Case
//!
//! All of the caller's sessions, most recent start first.

use std::sync::Arc;

use auth::Identity;

use crate::domain::entities::ClimbSession;
use crate::domain::repository::SessionRepository;
use crate::error::SessionResult;

/// Session history use case
pub struct SessionHistoryUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
}

impl<R> SessionHistoryUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity) -> SessionResult<Vec<ClimbSession>> {
        self.repo.history_for(&identity.username).await
    }
}
