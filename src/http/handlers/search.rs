use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, search::fuzzy_search, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub results: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum NameKind {
    Team,
    Referee,
    Season,
}

pub async fn search_teams_handler(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<SearchResults>, ApiError> {
    search_names(NameKind::Team, query, state).await
}

pub async fn search_referees_handler(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<SearchResults>, ApiError> {
    search_names(NameKind::Referee, query, state).await
}

pub async fn search_seasons_handler(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<SearchResults>, ApiError> {
    search_names(NameKind::Season, query, state).await
}

async fn search_names(
    kind: NameKind,
    query: SearchQuery,
    state: AppState,
) -> Result<Json<SearchResults>, ApiError> {
    let search = query.search.unwrap_or_default();
    if search.trim().is_empty() {
        return Ok(Json(SearchResults {
            results: Vec::new(),
        }));
    }

    let names = match kind {
        NameKind::Team => state.repo.team_names().await,
        NameKind::Referee => state.repo.referee_names().await,
        NameKind::Season => state.repo.season_names().await,
    }
    .map_err(|e| {
        tracing::error!("Error loading {:?} names: {}", kind, e);
        e.to_response()
    })?;

    let results = fuzzy_search(&search, &names);
    tracing::debug!("{:?} search {:?}: {} results", kind, search, results.len());
    Ok(Json(SearchResults { results }))
}
