use serde::Serialize;

use crate::{
    analytics::{mean, serialize_round2},
    errors::AppError,
    models::{MatchRecord, MatchResult},
};

pub const NO_MATCHES_FOR_REFEREE: &str = "No matches found for this referee.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefereeImpact {
    pub referee: String,
    #[serde(serialize_with = "serialize_round2")]
    pub average_yellow_cards_home: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub average_yellow_cards_away: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub average_red_cards_home: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub average_red_cards_away: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub home_win_rate: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub away_win_rate: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub draw_rate: f64,
}

pub fn referee_impact(referee: &str, matches: &[MatchRecord]) -> Result<RefereeImpact, AppError> {
    let officiated: Vec<&MatchRecord> = matches
        .iter()
        .filter(|m| m.referee.as_deref() == Some(referee))
        .collect();

    if officiated.is_empty() {
        return Err(AppError::NotFound(NO_MATCHES_FOR_REFEREE.into()));
    }

    let total = officiated.len();
    let sum = |field: fn(&MatchRecord) -> u32| -> u64 {
        officiated.iter().map(|m| u64::from(field(m))).sum()
    };
    let rate = |result: MatchResult| -> f64 {
        let hits = officiated
            .iter()
            .filter(|m| m.full_time_result == result)
            .count();
        mean(hits as u64, total) * 100.0
    };

    Ok(RefereeImpact {
        referee: referee.to_string(),
        average_yellow_cards_home: mean(sum(|m| m.home_yellow_cards), total),
        average_yellow_cards_away: mean(sum(|m| m.away_yellow_cards), total),
        average_red_cards_home: mean(sum(|m| m.home_red_cards), total),
        average_red_cards_away: mean(sum(|m| m.away_red_cards), total),
        home_win_rate: rate(MatchResult::Home),
        away_win_rate: rate(MatchResult::Away),
        draw_rate: rate(MatchResult::Draw),
    })
}
