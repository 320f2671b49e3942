use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    analytics::{
        segmentation::{find_segment, segment_dates},
        standings::{NO_SEASON_FOUND, SeasonWindow, Standings, compute_standings},
    },
    db::MatchFilter,
    errors::{ApiError, AppError},
    state::AppState,
};

pub const DATE_REQUIRED: &str = "Date parameter is required in format dd/mm/yyyy.";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format. Use dd/mm/yyyy.";
pub const INVALID_SOURCE: &str = "Source must be 'records' or 'inferred'.";

#[derive(Debug, Deserialize)]
pub struct StandingsQuery {
    pub date: Option<String>,
    pub source: Option<String>,
}

/// Where the season boundaries come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonSource {
    Records,
    Inferred,
}

impl SeasonSource {
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("records") => Ok(SeasonSource::Records),
            Some("inferred") => Ok(SeasonSource::Inferred),
            Some(_) => Err(AppError::BadRequest(INVALID_SOURCE.into())),
        }
    }
}

pub fn parse_standings_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Err(AppError::BadRequest(DATE_REQUIRED.into())),
        Some(value) => NaiveDate::parse_from_str(value, "%d/%m/%Y")
            .map_err(|_| AppError::BadRequest(INVALID_DATE_FORMAT.into())),
    }
}

pub async fn standings_handler(
    Query(query): Query<StandingsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Standings>, ApiError> {
    let standings = load_standings(&state, &query).await.map_err(|e| {
        match &e {
            AppError::DatabaseError(_) | AppError::ServerError(_) => {
                tracing::error!("Error computing standings for {:?}: {}", query.date, e)
            }
            _ => tracing::info!("No standings for {:?}: {}", query.date, e),
        }
        e.to_response()
    })?;

    tracing::info!(
        "Standings for {} as of {:?}: {} teams",
        standings.season_name,
        query.date,
        standings.number_of_teams
    );
    Ok(Json(standings))
}

async fn load_standings(state: &AppState, query: &StandingsQuery) -> Result<Standings, AppError> {
    let as_of = parse_standings_date(query.date.as_deref())?;
    let source = SeasonSource::parse(query.source.as_deref())?;

    let (window, filter) = match source {
        SeasonSource::Records => {
            let season = state
                .repo
                .season_covering(as_of)
                .await?
                .ok_or_else(|| AppError::NotFound(NO_SEASON_FOUND.into()))?;
            let filter = MatchFilter::in_season(season.id).up_to(as_of);
            (SeasonWindow::from(&season), filter)
        }
        SeasonSource::Inferred => {
            let dates = state.repo.match_dates().await?;
            let segments = segment_dates(dates, state.season_gap_days);
            let segment = find_segment(&segments, as_of)
                .ok_or_else(|| AppError::NotFound(NO_SEASON_FOUND.into()))?;
            let filter = MatchFilter::all()
                .starting(segment.start_date)
                .up_to(as_of);
            (SeasonWindow::from(segment), filter)
        }
    };

    let matches = state.repo.matches(&filter).await?;
    compute_standings(&window, &matches)
}
