use crate::{
    db::{
        MatchRepository,
        retry::{MAX_ATTEMPTS, with_conflict_retry},
    },
    errors::{AppError, FieldErrors},
    models::{CreatedMatch, MatchEntry, NewMatch, entry::NEW_SEASON_BOUNDS},
};

/// Records a validated entry, creating its teams, referee and season on first mention.
pub async fn add_match(
    repo: &dyn MatchRepository,
    entry: MatchEntry,
) -> Result<CreatedMatch, AppError> {
    let entry = &entry;
    with_conflict_retry(|| record_match(repo, entry), MAX_ATTEMPTS).await
}

async fn record_match(
    repo: &dyn MatchRepository,
    entry: &MatchEntry,
) -> Result<CreatedMatch, AppError> {
    let season = match repo.season_by_name(&entry.season).await? {
        Some(season) => season,
        None => match (entry.season_start_date, entry.season_end_date) {
            (Some(start), Some(end)) => {
                repo.find_or_create_season(&entry.season, start, end)
                    .await?
            }
            _ => return Err(missing_season_bounds()),
        },
    };

    let home_team = repo.find_or_create_team(&entry.home_team).await?;
    let away_team = repo.find_or_create_team(&entry.away_team).await?;
    let referee = repo.find_or_create_referee(&entry.referee).await?;

    let record = repo
        .create_match(NewMatch {
            season: season.clone(),
            date: entry.date,
            home_team,
            away_team,
            referee: Some(referee),
            full_time_result: entry.full_time_result,
            half_time_result: entry.half_time_result,
            home_goals: entry.home_goals,
            away_goals: entry.away_goals,
            home_yellow_cards: entry.home_yellow_cards,
            away_yellow_cards: entry.away_yellow_cards,
            home_red_cards: entry.home_red_cards,
            away_red_cards: entry.away_red_cards,
        })
        .await?;

    Ok(CreatedMatch {
        id: record.id,
        date: record.date,
        home_team: record.home_team,
        away_team: record.away_team,
        referee: record.referee,
        full_time_result: record.full_time_result,
        half_time_result: record.half_time_result,
        home_goals: record.home_goals,
        away_goals: record.away_goals,
        home_yellow_cards: record.home_yellow_cards,
        away_yellow_cards: record.away_yellow_cards,
        home_red_cards: record.home_red_cards,
        away_red_cards: record.away_red_cards,
        season: season.name,
        season_start_date: season.start_date,
        season_end_date: season.end_date,
    })
}

fn missing_season_bounds() -> AppError {
    let mut errors = FieldErrors::new();
    for field in ["season_start_date", "season_end_date"] {
        errors.insert(field.to_string(), vec![NEW_SEASON_BOUNDS.to_string()]);
    }
    AppError::Validation(errors)
}
