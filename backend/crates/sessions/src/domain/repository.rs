//! Repository Traits
//!
//! Every mutating operation takes the owner username alongside the
//! session id and must apply both in one atomic conditional write. The
//! boolean results report whether any record matched; `false` is the
//! caller's cue to surface NotFound.

use chrono::{DateTime, Utc};
use kernel::id::SessionId;

use crate::domain::entities::{Climb, ClimbSession};
use crate::error::SessionResult;

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist a freshly started session
    async fn create(&self, session: &ClimbSession) -> SessionResult<()>;

    /// Append a climb to an active session owned by `owner`
    async fn append_climb(
        &self,
        session_id: SessionId,
        owner: &str,
        climb: &Climb,
    ) -> SessionResult<bool>;

    /// End transition for an active session owned by `owner`
    ///
    /// Sets end time, fatigue, status and the rounded duration in a
    /// single statement.
    async fn finish(
        &self,
        session_id: SessionId,
        owner: &str,
        ended_at: DateTime<Utc>,
        fatigue_level: i16,
    ) -> SessionResult<bool>;

    /// All sessions owned by `owner`, most recent start first
    async fn history_for(&self, owner: &str) -> SessionResult<Vec<ClimbSession>>;

    /// Delete a session owned by `owner`
    async fn delete(&self, session_id: SessionId, owner: &str) -> SessionResult<bool>;
}
