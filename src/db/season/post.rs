use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{db::season::get::get_season_by_name, errors::AppError, models::Season};

pub async fn find_or_create_season(
    name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    postgres: &PgPool,
) -> Result<Season, AppError> {
    if end_date < start_date {
        return Err(AppError::BadRequest(
            "Season end date must not be before its start date".into(),
        ));
    }

    let inserted = sqlx::query_as::<_, Season>(
        "INSERT INTO seasons (name, start_date, end_date)
        VALUES ($1, $2, $3)
        ON CONFLICT (name) DO NOTHING
        RETURNING id, name, start_date, end_date",
    )
    .bind(name)
    .bind(start_date)
    .bind(end_date)
    .fetch_optional(postgres)
    .await?;

    if let Some(season) = inserted {
        tracing::info!("Created new season: {} (ID: {})", season.name, season.id);
        return Ok(season);
    }

    // Lost the race to a concurrent writer; the row is committed by now.
    get_season_by_name(name, postgres)
        .await?
        .ok_or_else(|| AppError::Conflict(format!("Season '{}' not visible after upsert", name)))
}
