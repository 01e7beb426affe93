//! HTTP Handlers

use axum::extract::State;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::Identity;

use crate::application::{CreateGymInput, CreateGymUseCase, ListGymsUseCase};
use crate::domain::repository::GymRepository;
use crate::error::GymResult;
use crate::presentation::dto::{CreateGymRequest, GymResponse};

/// Shared state for gym handlers
#[derive(Clone)]
pub struct GymAppState<R>
where
    R: GymRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /gyms/ (bearer token required)
pub async fn create_gym<R>(
    State(state): State<GymAppState<R>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreateGymRequest>,
) -> GymResult<Json<GymResponse>>
where
    R: GymRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateGymUseCase::new(state.repo.clone());

    let input = CreateGymInput {
        name: req.name,
        location: req.location,
        setting_style: req.setting_style,
    };

    let gym = use_case.execute(input, &identity).await?;

    Ok(Json(GymResponse::from(gym)))
}

/// GET /gyms/ (public)
pub async fn list_gyms<R>(
    State(state): State<GymAppState<R>>,
) -> GymResult<Json<Vec<GymResponse>>>
where
    R: GymRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListGymsUseCase::new(state.repo.clone());

    let gyms = use_case.execute().await?;

    Ok(Json(gyms.into_iter().map(GymResponse::from).collect()))
}
