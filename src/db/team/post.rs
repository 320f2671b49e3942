use sqlx::PgPool;

use crate::{db::team::get::get_team_by_name, errors::AppError, models::Team};

pub async fn find_or_create_team(name: &str, postgres: &PgPool) -> Result<Team, AppError> {
    let inserted = sqlx::query_as::<_, Team>(
        "INSERT INTO teams (name) VALUES ($1)
        ON CONFLICT (name) DO NOTHING
        RETURNING id, name",
    )
    .bind(name)
    .fetch_optional(postgres)
    .await?;

    if let Some(team) = inserted {
        tracing::info!("Created team {} (ID: {})", team.name, team.id);
        return Ok(team);
    }

    get_team_by_name(name, postgres)
        .await?
        .ok_or_else(|| AppError::Conflict(format!("Team '{}' not visible after upsert", name)))
}
