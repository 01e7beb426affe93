//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LogInRequest, SignUpRequest, SignUpResponse, TokenResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Json<SignUpResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(SignUpResponse {
        username: output.username,
    }))
}

/// POST /auth/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.config.clone());

    let input = LogInInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        access_token: output.access_token,
    }))
}
