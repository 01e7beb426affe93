//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::{AuthConfig, PgUserRepository, auth_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use gyms::{PgGymRepository, gyms_router};
use sessions::{PgSessionRepository, sessions_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,gyms=info,sessions=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = load_auth_config()?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/", get(liveness))
        .nest(
            "/auth",
            auth_router(PgUserRepository::new(pool.clone()), auth_config.clone()),
        )
        .nest(
            "/gyms",
            gyms_router(PgGymRepository::new(pool.clone()), auth_config.clone()),
        )
        .nest(
            "/sessions",
            sessions_router(PgSessionRepository::new(pool.clone()), auth_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .map(|p| p.parse())
        .transpose()
        .context("PORT must be a valid port number")?
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// GET / - liveness probe
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the auth configuration from the environment.
///
/// Debug builds fall back to a random per-process token secret so the
/// server runs with no configuration; release builds require
/// `TOKEN_SECRET` (base64, 32 bytes decoded).
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) && env::var("TOKEN_SECRET").is_err() {
        AuthConfig::development()
    } else {
        let secret_b64 = env::var("TOKEN_SECRET").context("TOKEN_SECRET must be set")?;
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)
            .context("TOKEN_SECRET must be valid base64")?;
        let secret: [u8; 32] = secret_bytes
            .try_into()
            .map_err(|_| anyhow::anyhow!("TOKEN_SECRET must decode to exactly 32 bytes"))?;
        AuthConfig {
            token_secret: secret,
            ..AuthConfig::default()
        }
    };

    if let Ok(ttl) = env::var("TOKEN_TTL_SECS") {
        let secs: u64 = ttl.parse().context("TOKEN_TTL_SECS must be an integer")?;
        config.token_ttl = Some(Duration::from_secs(secs));
    }

    if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
        config.password_pepper = Some(pepper.into_bytes());
    }

    Ok(config)
}
