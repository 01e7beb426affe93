//! Identity Middleware
//!
//! Verifies the `Authorization: Bearer <token>` header and inserts the
//! resulting [`Identity`] into request extensions for downstream
//! handlers. Every protected route in every feature crate goes through
//! this middleware; token verification is a pure computation, no
//! repository access involved.

use axum::body::Body;
use axum::http::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::token;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::value_objects::Identity;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct IdentityState {
    pub config: Arc<AuthConfig>,
}

impl IdentityState {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_identity(
    axum::extract::State(state): axum::extract::State<IdentityState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match bearer_token(&req) {
        Some(token) => token,
        None => return Err(AuthError::InvalidToken.into_response()),
    };

    match token::verify(&token, &state.config.token_secret) {
        Ok(claims) => {
            req.extensions_mut().insert(Identity {
                username: claims.username,
            });
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            Err(AuthError::InvalidToken.into_response())
        }
    }
}

/// Extract the token from `Authorization: Bearer <token>`
fn bearer_token(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_auth(value: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_extraction() {
        let req = request_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&req), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_missing_header() {
        let req = request_with_auth(None);
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let req = request_with_auth(Some("Basic dXNlcjpwdw=="));
        assert_eq!(bearer_token(&req), None);
    }
}
