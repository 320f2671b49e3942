use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    analytics::referee_impact::{RefereeImpact, referee_impact},
    db::MatchFilter,
    errors::ApiError,
    state::AppState,
};

pub async fn referee_impact_handler(
    Path(referee): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RefereeImpact>, ApiError> {
    let matches = state
        .repo
        .matches(&MatchFilter::refereed_by(&referee))
        .await
        .map_err(|e| {
            tracing::error!("Error loading matches for referee {}: {}", referee, e);
            e.to_response()
        })?;

    let impact = referee_impact(&referee, &matches).map_err(|e| {
        tracing::info!("No impact analysis for referee {}: {}", referee, e);
        e.to_response()
    })?;

    tracing::info!("Referee impact for {} over {} matches", referee, matches.len());
    Ok(Json(impact))
}
