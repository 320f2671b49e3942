pub mod comeback;
pub mod head_to_head;
pub mod matches;
pub mod referee;
pub mod rivalry;
pub mod search;
pub mod season;
pub mod standings;

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

pub use comeback::comebacks_handler;
pub use head_to_head::head_to_head_handler;
pub use matches::add_match_handler;
pub use referee::referee_impact_handler;
pub use rivalry::rivalries_handler;
pub use search::{search_referees_handler, search_seasons_handler, search_teams_handler};
pub use season::{get_seasons_handler, inferred_seasons_handler};
pub use standings::standings_handler;

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found_handler() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." })))
}
