use sqlx::PgPool;

use crate::{db::referee::get::get_referee_by_name, errors::AppError, models::Referee};

pub async fn find_or_create_referee(name: &str, postgres: &PgPool) -> Result<Referee, AppError> {
    let inserted = sqlx::query_as::<_, Referee>(
        "INSERT INTO referees (name) VALUES ($1)
        ON CONFLICT (name) DO NOTHING
        RETURNING id, name",
    )
    .bind(name)
    .fetch_optional(postgres)
    .await?;

    if let Some(referee) = inserted {
        tracing::info!("Created referee {} (ID: {})", referee.name, referee.id);
        return Ok(referee);
    }

    get_referee_by_name(name, postgres)
        .await?
        .ok_or_else(|| AppError::Conflict(format!("Referee '{}' not visible after upsert", name)))
}
