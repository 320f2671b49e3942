use sqlx::PgPool;

use crate::{
    db::matches::to_db_count,
    errors::AppError,
    models::{MatchRecord, NewMatch},
};

/// Entry point for external bulk loaders: one row per (date, home team, away team),
/// refreshed on every load. The HTTP surface only ever inserts.
pub async fn upsert_match(
    new_match: NewMatch,
    postgres: &PgPool,
) -> Result<(MatchRecord, bool), AppError> {
    let (id, created) = sqlx::query_as::<_, (i32, bool)>(
        "INSERT INTO matches (
            season_id, date, home_team_id, away_team_id, referee_id,
            full_time_result, half_time_result, home_goals, away_goals,
            home_yellow_cards, away_yellow_cards, home_red_cards, away_red_cards)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        ON CONFLICT (date, home_team_id, away_team_id) DO UPDATE SET
            season_id = EXCLUDED.season_id,
            referee_id = EXCLUDED.referee_id,
            full_time_result = EXCLUDED.full_time_result,
            half_time_result = EXCLUDED.half_time_result,
            home_goals = EXCLUDED.home_goals,
            away_goals = EXCLUDED.away_goals,
            home_yellow_cards = EXCLUDED.home_yellow_cards,
            away_yellow_cards = EXCLUDED.away_yellow_cards,
            home_red_cards = EXCLUDED.home_red_cards,
            away_red_cards = EXCLUDED.away_red_cards
        RETURNING id, (xmax = 0) AS created",
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
    .await?;

    if created {
        tracing::info!("Created match {}", id);
    } else {
        tracing::info!("Updated match {}", id);
    }

    Ok((new_match.into_record(id), created))
}
