use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{errors::AppError, models::Season};

pub async fn get_season_covering(
    date: NaiveDate,
    postgres: &PgPool,
) -> Result<Option<Season>, AppError> {
    let season = sqlx::query_as::<_, Season>(
        "SELECT id, name, start_date, end_date
			FROM seasons
			WHERE start_date <= $1 AND end_date >= $1
			ORDER BY start_date DESC, id ASC
			LIMIT 1",
    )
    .bind(date)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch season for {}: {}", date, e)))?;

    Ok(season)
}

pub async fn get_season_by_name(name: &str, postgres: &PgPool) -> Result<Option<Season>, AppError> {
    let season = sqlx::query_as::<_, Season>(
        "SELECT id, name, start_date, end_date FROM seasons WHERE name = $1",
    )
    .bind(name)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query season: {}", e)))?;

    Ok(season)
}

pub async fn get_all_seasons(postgres: &PgPool) -> Result<Vec<Season>, AppError> {
    let seasons = sqlx::query_as::<_, Season>(
        "SELECT id, name, start_date, end_date FROM seasons ORDER BY start_date ASC, id ASC",
    )
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch seasons: {}", e)))?;

    Ok(seasons)
}

pub async fn get_season_names(postgres: &PgPool) -> Result<Vec<String>, AppError> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM seasons ORDER BY id ASC")
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch season names: {}", e)))?;

    Ok(names)
}
