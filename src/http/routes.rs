use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        add_match_handler, comebacks_handler, get_seasons_handler, head_to_head_handler,
        health_handler, inferred_seasons_handler, not_found_handler, referee_impact_handler,
        rivalries_handler, search_referees_handler, search_seasons_handler, search_teams_handler,
        standings_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/teams/search", get(search_teams_handler))
        .route("/teams/comebacks", get(comebacks_handler))
        .route("/teams/{team1}/vs/{team2}/history", get(head_to_head_handler))
        .route("/referees/search", get(search_referees_handler))
        .route("/referees/{referee}/impact", get(referee_impact_handler))
        .route("/season/search", get(search_seasons_handler))
        .route("/seasons", get(get_seasons_handler))
        .route("/seasons/inferred", get(inferred_seasons_handler))
        .route("/standings", get(standings_handler))
        .route("/rivalries", get(rivalries_handler))
        .route("/add-match", post(add_match_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
}
