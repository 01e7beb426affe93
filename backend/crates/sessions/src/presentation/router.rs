//! Sessions Router
//!
//! Every route here is protected by the identity middleware.

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;

use auth::{AuthConfig, IdentityState, require_identity};

use crate::domain::repository::SessionRepository;
use crate::infra::postgres::PgSessionRepository;
use crate::presentation::handlers::{self, SessionAppState};

/// Create the Sessions router with PostgreSQL repository
pub fn sessions_router(repo: PgSessionRepository, auth_config: AuthConfig) -> Router {
    sessions_router_generic(repo, auth_config)
}

/// Create a generic Sessions router for any repository implementation
pub fn sessions_router_generic<R>(repo: R, auth_config: AuthConfig) -> Router
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = SessionAppState {
        repo: Arc::new(repo),
    };

    let identity = IdentityState::new(auth_config);

    Router::new()
        .route("/start", post(handlers::start_session::<R>))
        .route("/history", get(handlers::session_history::<R>))
        .route("/{session_id}/climb", post(handlers::log_climb::<R>))
        .route("/{session_id}/end", patch(handlers::end_session::<R>))
        .route("/{session_id}", delete(handlers::delete_session::<R>))
        .layer(middleware::from_fn_with_state(identity, require_identity))
        .with_state(state)
}
