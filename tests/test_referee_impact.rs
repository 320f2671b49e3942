mod common;

use common::{Fixture, records};
use league_analytics::{
    analytics::referee_impact::{NO_MATCHES_FOR_REFEREE, referee_impact},
    errors::AppError,
};
use serde_json::json;

fn officiated() -> Vec<Fixture> {
    vec![
        Fixture::new("2023-08-12", "Arsenal", "Chelsea", 2, 1).cards((2, 3), (0, 1)),
        Fixture::new("2023-08-19", "Everton", "Fulham", 0, 1).cards((1, 3), (0, 0)),
        Fixture::new("2023-08-26", "Wolves", "Luton", 1, 1).cards((0, 1), (1, 0)),
        Fixture::new("2023-09-02", "Brentford", "Burnley", 5, 0)
            .referee(Some("Anthony Taylor"))
            .cards((6, 6), (2, 2)),
        Fixture::new("2023-09-09", "Brentford", "Luton", 0, 0).referee(None),
    ]
}

#[test]
fn test_averages_and_rates() {
    let impact = referee_impact("Michael Oliver", &records(&officiated())).expect("impact");

    assert_eq!(impact.referee, "Michael Oliver");
    assert_eq!(impact.average_yellow_cards_home, 1.0);
    assert!((impact.average_yellow_cards_away - 7.0 / 3.0).abs() < 1e-9);
    assert!((impact.average_red_cards_home - 1.0 / 3.0).abs() < 1e-9);

    let total = impact.home_win_rate + impact.away_win_rate + impact.draw_rate;
    assert!((total - 100.0).abs() <= 0.01);
}

#[test]
fn test_rates_round_on_output() {
    let impact = referee_impact("Michael Oliver", &records(&officiated())).expect("impact");
    let body = serde_json::to_value(&impact).expect("serializes");

    assert_eq!(body["home_win_rate"], json!(33.33));
    assert_eq!(body["away_win_rate"], json!(33.33));
    assert_eq!(body["draw_rate"], json!(33.33));
    assert_eq!(body["average_yellow_cards_away"], json!(2.33));
}

#[test]
fn test_single_match_referee() {
    let impact = referee_impact("Anthony Taylor", &records(&officiated())).expect("impact");

    assert_eq!(impact.home_win_rate, 100.0);
    assert_eq!(impact.away_win_rate, 0.0);
    assert_eq!(impact.draw_rate, 0.0);
    assert_eq!(impact.average_red_cards_away, 2.0);
}

#[test]
fn test_unknown_referee() {
    let err = referee_impact("Nobody", &records(&officiated())).unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == NO_MATCHES_FOR_REFEREE));
    assert_eq!(err.to_response().0, axum::http::StatusCode::NOT_FOUND);
}
