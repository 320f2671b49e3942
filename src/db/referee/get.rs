use sqlx::PgPool;

use crate::{errors::AppError, models::Referee};

pub async fn get_referee_by_name(
    name: &str,
    postgres: &PgPool,
) -> Result<Option<Referee>, AppError> {
    let referee = sqlx::query_as::<_, Referee>("SELECT id, name FROM referees WHERE name = $1")
        .bind(name)
        .fetch_optional(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to query referee: {}", e)))?;

    Ok(referee)
}

pub async fn get_referee_names(postgres: &PgPool) -> Result<Vec<String>, AppError> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM referees ORDER BY id ASC")
        .fetch_all(postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to fetch referee names: {}", e))
        })?;

    Ok(names)
}
