//! Gyms Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::{AuthConfig, IdentityState, require_identity};

use crate::domain::repository::GymRepository;
use crate::infra::postgres::PgGymRepository;
use crate::presentation::handlers::{self, GymAppState};

/// Create the Gyms router with PostgreSQL repository
///
/// `POST /` requires a bearer token; `GET /` is public.
pub fn gyms_router(repo: PgGymRepository, auth_config: AuthConfig) -> Router {
    gyms_router_generic(repo, auth_config)
}

/// Create a generic Gyms router for any repository implementation
pub fn gyms_router_generic<R>(repo: R, auth_config: AuthConfig) -> Router
where
    R: GymRepository + Clone + Send + Sync + 'static,
{
    let state = GymAppState {
        repo: Arc::new(repo),
    };

    let identity = IdentityState::new(auth_config);

    let public = Router::new().route("/", get(handlers::list_gyms::<R>));

    let protected = Router::new()
        .route("/", post(handlers::create_gym::<R>))
        .route_layer(middleware::from_fn_with_state(identity, require_identity));

    public.merge(protected).with_state(state)
}
