mod common;

use common::{Fixture, records};
use league_analytics::{
    analytics::comeback::{comeback_winner, rank_comebacks},
    models::MatchResult,
};

#[test]
fn test_comeback_winner() {
    let home = Fixture::new("2023-08-12", "Aston Villa", "Everton", 2, 1)
        .half_time(MatchResult::Away)
        .record(1);
    assert_eq!(comeback_winner(&home), Some("Aston Villa"));

    let away = Fixture::new("2023-08-12", "Aston Villa", "Everton", 1, 3)
        .half_time(MatchResult::Home)
        .record(2);
    assert_eq!(comeback_winner(&away), Some("Everton"));
}

#[test]
fn test_draws_never_count() {
    let level_at_break = Fixture::new("2023-08-12", "Aston Villa", "Everton", 2, 1)
        .half_time(MatchResult::Draw)
        .record(1);
    assert_eq!(comeback_winner(&level_at_break), None);

    let level_at_end = Fixture::new("2023-08-12", "Aston Villa", "Everton", 1, 1)
        .half_time(MatchResult::Away)
        .record(2);
    assert_eq!(comeback_winner(&level_at_end), None);

    let held_on = Fixture::new("2023-08-12", "Aston Villa", "Everton", 2, 0)
        .half_time(MatchResult::Home)
        .record(3);
    assert_eq!(comeback_winner(&held_on), None);
}

#[test]
fn test_missing_half_time_is_ignored() {
    let m = Fixture::new("2023-08-12", "Aston Villa", "Everton", 2, 1).record(1);
    assert_eq!(comeback_winner(&m), None);
}

#[test]
fn test_ranking() {
    let matches = records(&[
        Fixture::new("2023-08-12", "Newcastle", "Wolves", 0, 2).half_time(MatchResult::Home),
        Fixture::new("2023-08-19", "Brighton", "West Ham", 3, 1).half_time(MatchResult::Away),
        Fixture::new("2023-08-26", "Newcastle", "Brighton", 2, 1).half_time(MatchResult::Away),
        Fixture::new("2023-09-02", "Wolves", "Brighton", 1, 1).half_time(MatchResult::Home),
        Fixture::new("2023-09-09", "Brighton", "Luton", 4, 1).half_time(MatchResult::Away),
    ]);

    let ranked = rank_comebacks(&matches);
    let summary: Vec<(&str, u32)> = ranked
        .iter()
        .map(|c| (c.team.as_str(), c.comebacks))
        .collect();

    assert_eq!(
        summary,
        vec![("Brighton", 2), ("Wolves", 1), ("Newcastle", 1)]
    );
    for pair in ranked.windows(2) {
        assert!(pair[0].comebacks >= pair[1].comebacks);
    }
}
