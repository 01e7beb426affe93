//! HTTP Handlers
//!
//! All session routes require a verified [`Identity`], inserted into
//! request extensions by the auth middleware.

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use kernel::id::SessionId;
use std::sync::Arc;
use uuid::Uuid;

use auth::Identity;

use crate::application::{
    DeleteSessionUseCase, EndSessionUseCase, LogClimbInput, LogClimbUseCase,
    SessionHistoryUseCase, StartSessionUseCase,
};
use crate::domain::repository::SessionRepository;
use crate::error::SessionResult;
use crate::presentation::dto::{
    AckResponse, ClimbRequest, EndSessionQuery, SessionResponse, StartSessionQuery,
    StartSessionResponse,
};

/// Shared state for session handlers
#[derive(Clone)]
pub struct SessionAppState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /sessions/start?gym_id=...
pub async fn start_session<R>(
    State(state): State<SessionAppState<R>>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<StartSessionQuery>,
) -> SessionResult<Json<StartSessionResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = StartSessionUseCase::new(state.repo.clone());

    let session_id = use_case.execute(query.gym_id, &identity).await?;

    Ok(Json(StartSessionResponse {
        session_id: session_id.to_string(),
    }))
}

/// POST /sessions/{session_id}/climb
pub async fn log_climb<R>(
    State(state): State<SessionAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<ClimbRequest>,
) -> SessionResult<Json<AckResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogClimbUseCase::new(state.repo.clone());

    let input = LogClimbInput {
        grade: req.grade,
        hold_type: req.hold_type,
        angle: req.angle,
        result: req.result,
        timestamp: req.timestamp,
    };

    use_case
        .execute(SessionId::from_uuid(session_id), input, &identity)
        .await?;

    Ok(Json(AckResponse {
        message: "Climb added",
    }))
}

/// PATCH /sessions/{session_id}/end?fatigue=N
pub async fn end_session<R>(
    State(state): State<SessionAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<EndSessionQuery>,
) -> SessionResult<Json<AckResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = EndSessionUseCase::new(state.repo.clone());

    use_case
        .execute(SessionId::from_uuid(session_id), query.fatigue, &identity)
        .await?;

    Ok(Json(AckResponse {
        message: "Session finalized",
    }))
}

/// GET /sessions/history
pub async fn session_history<R>(
    State(state): State<SessionAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> SessionResult<Json<Vec<SessionResponse>>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SessionHistoryUseCase::new(state.repo.clone());

    let sessions = use_case.execute(&identity).await?;

    Ok(Json(
        sessions.into_iter().map(SessionResponse::from).collect(),
    ))
}

/// DELETE /sessions/{session_id}
pub async fn delete_session<R>(
    State(state): State<SessionAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(session_id): Path<Uuid>,
) -> SessionResult<Json<AckResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteSessionUseCase::new(state.repo.clone());

    use_case
        .execute(SessionId::from_uuid(session_id), &identity)
        .await?;

    Ok(Json(AckResponse {
        message: "Session deleted",
    }))
}
