use sqlx::PgPool;

use crate::{
    db::matches::to_db_count,
    errors::AppError,
    models::{MatchRecord, NewMatch, entry::duplicate_match_error},
};

pub async fn insert_match(
    new_match: NewMatch,
    postgres: &PgPool,
) -> Result<MatchRecord, AppError> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO matches (
            season_id, date, home_team_id, away_team_id, referee_id,
            full_time_result, half_time_result, home_goals, away_goals,
            home_yellow_cards, away_yellow_cards, home_red_cards, away_red_cards)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING id",
    )
    .bind(new_match.season.id)
    .bind(new_match.date)
    .bind(new_match.home_team.id)
    .bind(new_match.away_team.id)
    .bind(new_match.referee.as_ref().map(|r| r.id))
    .bind(new_match.full_time_result.code())
    .bind(new_match.half_time_result.map(|r| r.code()))
    .bind(to_db_count("home_goals", new_match.home_goals)?)
    .bind(to_db_count("away_goals", new_match.away_goals)?)
    .bind(to_db_count("home_yellow_cards", new_match.home_yellow_cards)?)
    .bind(to_db_count("away_yellow_cards", new_match.away_yellow_cards)?)
    .bind(to_db_count("home_red_cards", new_match.home_red_cards)?)
    .bind(to_db_count("away_red_cards", new_match.away_red_cards)?)
    .fetch_one(postgres)
    .await
    .map_err(|e| match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => duplicate_match_error(),
        _ => AppError::from(e),
    })?;

    tracing::info!(
        "Created match {}: {} vs {} on {}",
        id,
        new_match.home_team.name,
        new_match.away_team.name,
        new_match.date
    );

    Ok(new_match.into_record(id))
}
