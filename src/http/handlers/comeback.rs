use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    analytics::{
        apply_limit,
        comeback::{ComebackCount, rank_comebacks},
        parse_limit,
    },
    db::MatchFilter,
    errors::ApiError,
    http::handlers::rivalry::LimitQuery,
    state::AppState,
};

pub async fn comebacks_handler(
    Query(query): Query<LimitQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ComebackCount>>, ApiError> {
    let limit = parse_limit(query.limit.as_deref()).map_err(|e| e.to_response())?;

    let matches = state.repo.matches(&MatchFilter::all()).await.map_err(|e| {
        tracing::error!("Error loading matches for comebacks: {}", e);
        e.to_response()
    })?;

    let comebacks = apply_limit(rank_comebacks(&matches), limit);

    tracing::info!("Ranked {} comeback teams (limit {:?})", comebacks.len(), limit);
    Ok(Json(comebacks))
}
