mod common;

use common::{Fixture, date, seed, seed_season};
use league_analytics::{
    db::{
        InMemoryRepository, MatchFilter, MatchRepository, add_match,
        retry::{MAX_ATTEMPTS, with_conflict_retry},
    },
    errors::AppError,
    models::{
        MatchEntry, MatchResult, NewMatch,
        entry::{DUPLICATE_MATCH, NEW_SEASON_BOUNDS},
    },
};
use serde_json::json;

fn entry(season: &str, with_bounds: bool) -> MatchEntry {
    let mut body = json!({
        "date": "2024-03-10",
        "home_team": "Liverpool",
        "away_team": "Man City",
        "referee": "Michael Oliver",
        "full_time_result": "D",
        "home_goals": 1,
        "away_goals": 1,
        "season": season
    });
    if with_bounds {
        body["season_start_date"] = json!("2023-08-11");
        body["season_end_date"] = json!("2024-05-19");
    }
    MatchEntry::from_json(&body).expect("valid entry")
}

#[tokio::test]
async fn test_find_or_create_is_idempotent() {
    let repo = InMemoryRepository::new();

    let first = repo.find_or_create_team("Arsenal").await.unwrap();
    let again = repo.find_or_create_team("Arsenal").await.unwrap();
    let other = repo.find_or_create_team("Chelsea").await.unwrap();
    assert_eq!(first, again);
    assert_ne!(first.id, other.id);

    let season = seed_season(&repo, "2023/2024", "2023-08-01", "2024-05-31").await;
    // Existing seasons come back unchanged even if different bounds are offered.
    let same = repo
        .find_or_create_season("2023/2024", date("2023-07-01"), date("2024-06-30"))
        .await
        .unwrap();
    assert_eq!(season, same);

    assert_eq!(repo.team_names().await.unwrap(), vec!["Arsenal", "Chelsea"]);
}

#[tokio::test]
async fn test_overlapping_seasons_prefer_latest_start() {
    let repo = InMemoryRepository::new();
    seed_season(&repo, "2023/2024", "2023-08-01", "2024-06-30").await;
    let later = seed_season(&repo, "2024/2025", "2024-06-01", "2025-05-31").await;

    let covering = repo.season_covering(date("2024-06-15")).await.unwrap();
    assert_eq!(covering, Some(later));

    assert!(repo.season_covering(date("2026-01-01")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_match_filters() {
    let repo = InMemoryRepository::new();
    let season = seed_season(&repo, "2023/2024", "2023-08-01", "2024-05-31").await;
    seed(
        &repo,
        &season,
        &[
            Fixture::new("2024-01-20", "Arsenal", "Chelsea", 1, 0),
            Fixture::new("2023-09-02", "Chelsea", "Arsenal", 2, 2).referee(Some("Anthony Taylor")),
            Fixture::new("2023-10-07", "Arsenal", "Everton", 3, 0),
        ],
    )
    .await;

    let derby = repo
        .matches(&MatchFilter::between("Arsenal", "Chelsea"))
        .await
        .unwrap();
    assert_eq!(derby.len(), 2);
    assert_eq!(derby[0].date, date("2023-09-02"));

    let taylor = repo
        .matches(&MatchFilter::refereed_by("Anthony Taylor"))
        .await
        .unwrap();
    assert_eq!(taylor.len(), 1);

    let autumn = repo
        .matches(&MatchFilter::in_season(season.id).up_to(date("2023-12-31")))
        .await
        .unwrap();
    assert_eq!(autumn.len(), 2);

    let dates = repo.match_dates().await.unwrap();
    assert_eq!(
        dates,
        vec![date("2023-09-02"), date("2023-10-07"), date("2024-01-20")]
    );
}

#[tokio::test]
async fn test_upsert_updates_in_place() {
    let repo = InMemoryRepository::new();
    let season = seed_season(&repo, "2023/2024", "2023-08-01", "2024-05-31").await;
    let home_team = repo.find_or_create_team("Arsenal").await.unwrap();
    let away_team = repo.find_or_create_team("Chelsea").await.unwrap();

    let new_match = NewMatch {
        season,
        date: date("2024-01-20"),
        home_team,
        away_team,
        referee: None,
        full_time_result: MatchResult::Home,
        half_time_result: None,
        home_goals: 1,
        away_goals: 0,
        home_yellow_cards: 0,
        away_yellow_cards: 0,
        home_red_cards: 0,
        away_red_cards: 0,
    };

    let (first, created) = repo.upsert_match(new_match.clone()).await.unwrap();
    assert!(created);

    let corrected = NewMatch {
        full_time_result: MatchResult::Draw,
        away_goals: 1,
        ..new_match
    };
    let (second, created) = repo.upsert_match(corrected).await.unwrap();
    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.full_time_result, MatchResult::Draw);

    assert_eq!(repo.matches(&MatchFilter::all()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_match_creates_references() {
    let repo = InMemoryRepository::new();

    let created = add_match(&repo, entry("2023/2024", true)).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.season, "2023/2024");
    assert_eq!(created.season_start_date, date("2023-08-11"));
    assert_eq!(created.referee.as_deref(), Some("Michael Oliver"));
    assert_eq!(created.home_yellow_cards, 0);

    let seasons = repo.seasons().await.unwrap();
    assert_eq!(seasons.len(), 1);
    assert_eq!(repo.referee_names().await.unwrap(), vec!["Michael Oliver"]);
}

#[tokio::test]
async fn test_add_match_needs_bounds_for_new_season() {
    let repo = InMemoryRepository::new();

    let err = add_match(&repo, entry("2023/2024", false)).await.unwrap_err();
    let fields = match err {
        AppError::Validation(fields) => fields,
        other => panic!("expected a validation error, got {:?}", other),
    };
    assert_eq!(fields["season_start_date"], vec![NEW_SEASON_BOUNDS.to_string()]);
    assert_eq!(fields["season_end_date"], vec![NEW_SEASON_BOUNDS.to_string()]);
    assert!(repo.team_names().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_match_rejects_duplicates() {
    let repo = InMemoryRepository::new();
    add_match(&repo, entry("2023/2024", true)).await.unwrap();

    // The season now exists, so bounds are no longer needed.
    let err = add_match(&repo, entry("2023/2024", false)).await.unwrap_err();
    let fields = match err {
        AppError::Validation(fields) => fields,
        other => panic!("expected a validation error, got {:?}", other),
    };
    assert_eq!(fields["non_field_errors"], vec![DUPLICATE_MATCH.to_string()]);
}

#[tokio::test]
async fn test_conflicts_are_retried() {
    let mut attempts = 0;
    let result = with_conflict_retry(
        || {
            attempts += 1;
            let n = attempts;
            async move {
                if n < 3 {
                    Err(AppError::Conflict("duplicate key".into()))
                } else {
                    Ok(n)
                }
            }
        },
        MAX_ATTEMPTS,
    )
    .await;

    assert_eq!(result.unwrap(), 3);
}

#[tokio::test]
async fn test_retry_gives_up() {
    let mut attempts = 0;
    let result: Result<(), AppError> = with_conflict_retry(
        || {
            attempts += 1;
            async { Err(AppError::Conflict("duplicate key".into())) }
        },
        MAX_ATTEMPTS,
    )
    .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(attempts, MAX_ATTEMPTS);

    let mut attempts = 0;
    let result: Result<(), AppError> = with_conflict_retry(
        || {
            attempts += 1;
            async { Err(AppError::BadRequest("bad".into())) }
        },
        MAX_ATTEMPTS,
    )
    .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(attempts, 1);
}
