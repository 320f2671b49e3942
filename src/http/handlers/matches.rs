use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    db::add_match,
    errors::{ApiError, AppError},
    models::{CreatedMatch, MatchEntry},
    state::AppState,
};

pub async fn add_match_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedMatch>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!("Rejected add-match body: {}", rejection);
        AppError::BadRequest(format!("JSON parse error - {}", rejection.body_text())).to_response()
    })?;

    let entry = MatchEntry::from_json(&body).map_err(|fields| {
        tracing::info!("Invalid add-match payload: {:?}", fields);
        AppError::Validation(fields).to_response()
    })?;

    let created = add_match(state.repo.as_ref(), entry).await.map_err(|e| {
        tracing::error!("Error adding match: {}", e);
        e.to_response()
    })?;

    tracing::info!(
        "Match {} recorded: {} vs {} on {}",
        created.id,
        created.home_team,
        created.away_team,
        created.date
    );
    Ok((StatusCode::CREATED, Json(created)))
}
