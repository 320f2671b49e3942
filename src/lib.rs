pub mod analytics;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod search;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use middleware::{cors_layer, create_rate_limiter, rate_limit_middleware};
use std::{net::SocketAddr, sync::Arc};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    db::{InMemoryRepository, PgRepository, pool::create_pool},
    errors::AppError,
    state::{AppState, MatchRepo},
};

/// Routes plus the rate limit, CORS, tracing and concurrency layers.
pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    let rate_limiter = create_rate_limiter(config.rate_limit_per_minute);

    http::create_http_routes(state)
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(GlobalConcurrencyLimitLayer::new(config.max_concurrent_requests))
}

pub async fn connect_repository(config: &AppConfig) -> Result<MatchRepo, AppError> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, &config.db_pool).await?;
            let repo = PgRepository::new(pool);
            repo.migrate().await?;
            tracing::info!("Using Postgres match repository");
            Ok(Arc::new(repo))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, matches are kept in memory only");
            Ok(Arc::new(InMemoryRepository::new()))
        }
    }
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let repo = connect_repository(&config).await?;
    let state = AppState::new(repo).with_season_gap_days(config.season_gap_days);

    let app = build_app(state, &config);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| AppError::ServerError(format!("Failed to bind address: {}", e)))?;

    tracing::info!("Listening on 0.0.0.0:{}", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::ServerError(e.to_string()))
}
