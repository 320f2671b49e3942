use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    analytics::head_to_head::{HeadToHead, head_to_head},
    db::MatchFilter,
    errors::ApiError,
    state::AppState,
};

pub async fn head_to_head_handler(
    Path((team1, team2)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<HeadToHead>, ApiError> {
    let matches = state
        .repo
        .matches(&MatchFilter::between(&team1, &team2))
        .await
        .map_err(|e| {
            tracing::error!("Error loading matches for {} vs {}: {}", team1, team2, e);
            e.to_response()
        })?;

    let history = head_to_head(&team1, &team2, &matches).map_err(|e| {
        tracing::info!("No head-to-head for {} vs {}: {}", team1, team2, e);
        e.to_response()
    })?;

    tracing::info!(
        "Head-to-head {} vs {}: {} matches",
        team1,
        team2,
        history.total_matches
    );
    Ok(Json(history))
}
