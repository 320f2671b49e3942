use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::{
    db::MatchFilter,
    errors::AppError,
    models::{MatchRecord, MatchResult},
};

const MATCH_SELECT: &str = "SELECT m.id, m.season_id, m.date,
        ht.name AS home_team, awt.name AS away_team, r.name AS referee,
        m.full_time_result, m.half_time_result, m.home_goals, m.away_goals,
        m.home_yellow_cards, m.away_yellow_cards, m.home_red_cards, m.away_red_cards
    FROM matches m
    JOIN teams ht ON ht.id = m.home_team_id
    JOIN teams awt ON awt.id = m.away_team_id
    LEFT JOIN referees r ON r.id = m.referee_id";

/// A match as stored, before result codes and counts are checked.
#[derive(Debug, FromRow)]
pub struct MatchRow {
    pub id: i32,
    pub season_id: i32,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub referee: Option<String>,
    pub full_time_result: String,
    pub half_time_result: Option<String>,
    pub home_goals: i32,
    pub away_goals: i32,
    pub home_yellow_cards: i32,
    pub away_yellow_cards: i32,
    pub home_red_cards: i32,
    pub away_red_cards: i32,
}

impl TryFrom<MatchRow> for MatchRecord {
    type Error = String;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        let count = |field: &str, value: i32| {
            u32::try_from(value).map_err(|_| format!("negative {} ({})", field, value))
        };

        Ok(MatchRecord {
            id: row.id,
            season_id: row.season_id,
            date: row.date,
            full_time_result: row.full_time_result.parse::<MatchResult>()?,
            // An unreadable half-time code only costs the comeback check.
            half_time_result: row
                .half_time_result
                .as_deref()
                .and_then(|code| code.parse::<MatchResult>().ok()),
            home_goals: count("home_goals", row.home_goals)?,
            away_goals: count("away_goals", row.away_goals)?,
            home_yellow_cards: count("home_yellow_cards", row.home_yellow_cards)?,
            away_yellow_cards: count("away_yellow_cards", row.away_yellow_cards)?,
            home_red_cards: count("home_red_cards", row.home_red_cards)?,
            away_red_cards: count("away_red_cards", row.away_red_cards)?,
            home_team: row.home_team,
            away_team: row.away_team,
            referee: row.referee,
        })
    }
}

pub async fn get_matches(
    filter: &MatchFilter,
    postgres: &PgPool,
) -> Result<Vec<MatchRecord>, AppError> {
    let mut query = QueryBuilder::<Postgres>::new(MATCH_SELECT);
    query.push(" WHERE TRUE");

    if let Some((team_a, team_b)) = &filter.teams {
        query
            .push(" AND ((ht.name = ")
            .push_bind(team_a.clone())
            .push(" AND awt.name = ")
            .push_bind(team_b.clone())
            .push(") OR (ht.name = ")
            .push_bind(team_b.clone())
            .push(" AND awt.name = ")
            .push_bind(team_a.clone())
            .push("))");
    }
    if let Some(referee) = &filter.referee {
        query.push(" AND r.name = ").push_bind(referee.clone());
    }
    if let Some(season_id) = filter.season_id {
        query.push(" AND m.season_id = ").push_bind(season_id);
    }
    if let Some(from) = filter.date_from {
        query.push(" AND m.date >= ").push_bind(from);
    }
    if let Some(to) = filter.date_to {
        query.push(" AND m.date <= ").push_bind(to);
    }
    query.push(" ORDER BY m.date ASC, m.id ASC");

    let rows = query
        .build_query_as::<MatchRow>()
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch matches: {}", e)))?;

    let records = rows
        .into_iter()
        .filter_map(|row| {
            let id = row.id;
            match MatchRecord::try_from(row) {
                Ok(record) => Some(record),
                Err(reason) => {
                    tracing::warn!("Skipping malformed match {}: {}", id, reason);
                    None
                }
            }
        })
        .collect();

    Ok(records)
}

pub async fn get_match_dates(postgres: &PgPool) -> Result<Vec<NaiveDate>, AppError> {
    let dates = sqlx::query_scalar::<_, NaiveDate>("SELECT date FROM matches ORDER BY date ASC")
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch match dates: {}", e)))?;

    Ok(dates)
}
