use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    analytics::segmentation::{SeasonSegment, segment_dates},
    errors::{ApiError, AppError},
    models::Season,
    state::AppState,
};

pub const INVALID_GAP_DAYS: &str = "gap_days must be a non-negative integer.";

#[derive(Debug, Deserialize)]
pub struct InferredSeasonsQuery {
    pub gap_days: Option<String>,
}

pub async fn get_seasons_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Season>>, ApiError> {
    let seasons = state.repo.seasons().await.map_err(|e| {
        tracing::error!("Error retrieving seasons: {}", e);
        e.to_response()
    })?;

    tracing::info!("Retrieved {} seasons", seasons.len());
    Ok(Json(seasons))
}

pub async fn inferred_seasons_handler(
    Query(query): Query<InferredSeasonsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SeasonSegment>>, ApiError> {
    let gap_days = match query.gap_days.as_deref().map(str::trim) {
        None | Some("") => state.season_gap_days,
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|days| *days >= 0)
            .ok_or_else(|| AppError::BadRequest(INVALID_GAP_DAYS.into()).to_response())?,
    };

    let dates = state.repo.match_dates().await.map_err(|e| {
        tracing::error!("Error loading match dates: {}", e);
        e.to_response()
    })?;

    let segments = segment_dates(dates, gap_days);
    tracing::info!("Inferred {} seasons with a {} day gap", segments.len(), gap_days);
    Ok(Json(segments))
}
