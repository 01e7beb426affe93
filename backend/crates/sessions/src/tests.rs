//! Unit tests for the session use cases, backed by an in-memory
//! repository that mirrors the ownership-scoped filter semantics of the
//! Postgres implementation.

use std::sync::{Arc, Mutex};

use auth::Identity;
use chrono::{DateTime, Duration, Utc};
use kernel::id::SessionId;

use crate::application::{
    DeleteSessionUseCase, EndSessionUseCase, LogClimbInput, LogClimbUseCase,
    SessionHistoryUseCase, StartSessionUseCase,
};
use crate::domain::entities::{Climb, ClimbSession, SessionStatus};
use crate::domain::repository::SessionRepository;
use crate::error::{SessionError, SessionResult};

/// In-memory session repository
///
/// Each mutation locates a row by (id, owner[, active]) and applies the
/// entity transition, reporting whether anything matched, exactly like
/// the SQL filters.
#[derive(Clone, Default)]
struct MemSessionRepository {
    sessions: Arc<Mutex<Vec<ClimbSession>>>,
}

impl SessionRepository for MemSessionRepository {
    async fn create(&self, session: &ClimbSession) -> SessionResult<()> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn append_climb(
        &self,
        session_id: SessionId,
        owner: &str,
        climb: &Climb,
    ) -> SessionResult<bool> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions
            .iter_mut()
            .find(|s| s.session_id == session_id && s.username == owner && s.is_active())
        {
            Some(session) => Ok(session.log_climb(climb.clone())),
            None => Ok(false),
        }
    }

    async fn finish(
        &self,
        session_id: SessionId,
        owner: &str,
        ended_at: DateTime<Utc>,
        fatigue_level: i16,
    ) -> SessionResult<bool> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions
            .iter_mut()
            .find(|s| s.session_id == session_id && s.username == owner && s.is_active())
        {
            Some(session) => Ok(session.finish(ended_at, fatigue_level)),
            None => Ok(false),
        }
    }

    async fn history_for(&self, owner: &str) -> SessionResult<Vec<ClimbSession>> {
        let mut sessions: Vec<ClimbSession> = self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.username == owner)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(sessions)
    }

    async fn delete(&self, session_id: SessionId, owner: &str) -> SessionResult<bool> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| !(s.session_id == session_id && s.username == owner));
        Ok(sessions.len() < before)
    }
}

fn identity(username: &str) -> Identity {
    Identity {
        username: username.to_string(),
    }
}

fn climb_input(result: &str) -> LogClimbInput {
    LogClimbInput {
        grade: "6b+".to_string(),
        hold_type: "crimp".to_string(),
        angle: "overhang".to_string(),
        result: result.to_string(),
        timestamp: None,
    }
}

async fn start(repo: &Arc<MemSessionRepository>, owner: &str) -> SessionId {
    StartSessionUseCase::new(repo.clone())
        .execute("gym-1".to_string(), &identity(owner))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_ownership_isolation_on_end() {
    let repo = Arc::new(MemSessionRepository::default());
    let session_id = start(&repo, "alice").await;

    // A different identity cannot end the session
    let err = EndSessionUseCase::new(repo.clone())
        .execute(session_id, 5, &identity("bob"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NotFound));

    // The owner still can
    EndSessionUseCase::new(repo)
        .execute(session_id, 5, &identity("alice"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_log_climb_on_missing_or_foreign_session_fails() {
    let repo = Arc::new(MemSessionRepository::default());
    let session_id = start(&repo, "alice").await;
    let use_case = LogClimbUseCase::new(repo.clone());

    // Nonexistent session
    let err = use_case
        .execute(SessionId::new(), climb_input("Send"), &identity("alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NotFound));

    // Someone else's session: identical signal
    let err = use_case
        .execute(session_id, climb_input("Send"), &identity("bob"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NotFound));

    // The owner succeeds
    use_case
        .execute(session_id, climb_input("Send"), &identity("alice"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_log_climb_rejected_after_end() {
    let repo = Arc::new(MemSessionRepository::default());
    let session_id = start(&repo, "alice").await;

    EndSessionUseCase::new(repo.clone())
        .execute(session_id, 5, &identity("alice"))
        .await
        .unwrap();

    let err = LogClimbUseCase::new(repo)
        .execute(session_id, climb_input("Send"), &identity("alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NotFound));
}

#[tokio::test]
async fn test_end_twice_fails() {
    let repo = Arc::new(MemSessionRepository::default());
    let session_id = start(&repo, "alice").await;
    let use_case = EndSessionUseCase::new(repo);

    use_case
        .execute(session_id, 5, &identity("alice"))
        .await
        .unwrap();

    let err = use_case
        .execute(session_id, 9, &identity("alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NotFound));
}

#[tokio::test]
async fn test_end_sets_duration_and_fatigue() {
    let repo = Arc::new(MemSessionRepository::default());
    let session_id = start(&repo, "alice").await;

    EndSessionUseCase::new(repo.clone())
        .execute(session_id, 7, &identity("alice"))
        .await
        .unwrap();

    let history = SessionHistoryUseCase::new(repo)
        .execute(&identity("alice"))
        .await
        .unwrap();
    let session = &history[0];

    assert_eq!(session.status, SessionStatus::Completed);
    assert_eq!(session.fatigue_level, Some(7));
    assert!(session.end_time.is_some());
    // Computed once at the transition, never negative
    assert!(session.duration_minutes.unwrap() >= 0.0);
}

#[tokio::test]
async fn test_history_is_owner_scoped_and_descending() {
    let repo = Arc::new(MemSessionRepository::default());

    // Three sessions for alice with distinct start times, one for bob
    let base = Utc::now();
    for offset in [2i64, 0, 1] {
        let mut session = ClimbSession::start("alice".to_string(), "gym-1".to_string());
        session.start_time = base + Duration::minutes(offset);
        repo.create(&session).await.unwrap();
    }
    let mut bobs = ClimbSession::start("bob".to_string(), "gym-1".to_string());
    bobs.start_time = base + Duration::minutes(10);
    repo.create(&bobs).await.unwrap();

    let history = SessionHistoryUseCase::new(repo)
        .execute(&identity("alice"))
        .await
        .unwrap();

    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|s| s.username == "alice"));
    assert!(
        history
            .windows(2)
            .all(|pair| pair[0].start_time > pair[1].start_time)
    );
}

#[tokio::test]
async fn test_delete_twice_fails_the_second_time() {
    let repo = Arc::new(MemSessionRepository::default());
    let session_id = start(&repo, "alice").await;
    let use_case = DeleteSessionUseCase::new(repo);

    use_case
        .execute(session_id, &identity("alice"))
        .await
        .unwrap();

    let err = use_case
        .execute(session_id, &identity("alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NotFound));
}

#[tokio::test]
async fn test_delete_is_ownership_scoped() {
    let repo = Arc::new(MemSessionRepository::default());
    let session_id = start(&repo, "alice").await;

    let err = DeleteSessionUseCase::new(repo.clone())
        .execute(session_id, &identity("bob"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NotFound));

    // Still present for the owner
    let history = SessionHistoryUseCase::new(repo)
        .execute(&identity("alice"))
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_climbs_accumulate_in_order() {
    let repo = Arc::new(MemSessionRepository::default());
    let session_id = start(&repo, "alice").await;
    let use_case = LogClimbUseCase::new(repo.clone());

    for result in ["Flash", "Attempt", "Send"] {
        use_case
            .execute(session_id, climb_input(result), &identity("alice"))
            .await
            .unwrap();
    }

    let history = SessionHistoryUseCase::new(repo)
        .execute(&identity("alice"))
        .await
        .unwrap();
    let results: Vec<&str> = history[0].climbs.iter().map(|c| c.result.as_str()).collect();
    assert_eq!(results, vec!["Flash", "Attempt", "Send"]);
}
