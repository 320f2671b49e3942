use sqlx::PgPool;

use crate::{errors::AppError, models::Team};

pub async fn get_team_by_name(name: &str, postgres: &PgPool) -> Result<Option<Team>, AppError> {
    let team = sqlx::query_as::<_, Team>("SELECT id, name FROM teams WHERE name = $1")
        .bind(name)
        .fetch_optional(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to query team: {}", e)))?;

    Ok(team)
}

pub async fn get_team_names(postgres: &PgPool) -> Result<Vec<String>, AppError> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM teams ORDER BY id ASC")
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team names: {}", e)))?;

    Ok(names)
}
