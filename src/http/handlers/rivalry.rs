use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    analytics::{
        apply_limit, parse_limit,
        rivalry::{Rivalry, rank_rivalries},
    },
    db::MatchFilter,
    errors::ApiError,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

pub async fn rivalries_handler(
    Query(query): Query<LimitQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Rivalry>>, ApiError> {
    let limit = parse_limit(query.limit.as_deref()).map_err(|e| e.to_response())?;

    let matches = state.repo.matches(&MatchFilter::all()).await.map_err(|e| {
        tracing::error!("Error loading matches for rivalries: {}", e);
        e.to_response()
    })?;

    let rivalries = apply_limit(rank_rivalries(&matches), limit);

    tracing::info!("Ranked {} rivalries (limit {:?})", rivalries.len(), limit);
    Ok(Json(rivalries))
}
