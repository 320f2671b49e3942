use serde::Serialize;

use crate::{
    analytics::{mean, serialize_round2},
    errors::AppError,
    models::{MatchRecord, MatchResult},
};

pub const NO_MATCHES_BETWEEN: &str = "No matches found between these teams.";

/// Head-to-head record, reported in the order the two teams were asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHead {
    pub team1: String,
    pub team2: String,
    pub total_matches: u32,
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub draws: u32,
    pub total_goals_team1: u64,
    pub total_goals_team2: u64,
    #[serde(serialize_with = "serialize_round2")]
    pub average_goals_team1: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub average_goals_team2: f64,
}

pub fn head_to_head(
    team1: &str,
    team2: &str,
    matches: &[MatchRecord],
) -> Result<HeadToHead, AppError> {
    let meetings: Vec<&MatchRecord> = matches
        .iter()
        .filter(|m| m.is_between(team1, team2))
        .collect();

    if meetings.is_empty() {
        return Err(AppError::NotFound(NO_MATCHES_BETWEEN.into()));
    }

    let mut team1_wins = 0;
    let mut team2_wins = 0;
    let mut draws = 0;
    let mut team1_goals = 0u64;
    let mut team2_goals = 0u64;

    for m in &meetings {
        let team1_at_home = m.home_team == team1;

        if team1_at_home {
            team1_goals += u64::from(m.home_goals);
            team2_goals += u64::from(m.away_goals);
        } else {
            team1_goals += u64::from(m.away_goals);
            team2_goals += u64::from(m.home_goals);
        }

        match (m.full_time_result, team1_at_home) {
            (MatchResult::Draw, _) => draws += 1,
            (MatchResult::Home, true) | (MatchResult::Away, false) => team1_wins += 1,
            (MatchResult::Home, false) | (MatchResult::Away, true) => team2_wins += 1,
        }
    }

    let total = meetings.len();

    Ok(HeadToHead {
        team1: team1.to_string(),
        team2: team2.to_string(),
        total_matches: total as u32,
        team1_wins,
        team2_wins,
        draws,
        total_goals_team1: team1_goals,
        total_goals_team2: team2_goals,
        average_goals_team1: mean(team1_goals, total),
        average_goals_team2: mean(team2_goals, total),
    })
}
