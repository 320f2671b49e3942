use std::collections::HashMap;

use serde::Serialize;

use crate::models::{MatchRecord, MatchResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComebackCount {
    pub team: String,
    pub comebacks: u32,
}

/// The team that trailed at half-time and still won, if there was one.
pub fn comeback_winner(m: &MatchRecord) -> Option<&str> {
    match (m.half_time_result?, m.full_time_result) {
        (MatchResult::Away, MatchResult::Home) => Some(m.home_team.as_str()),
        (MatchResult::Home, MatchResult::Away) => Some(m.away_team.as_str()),
        _ => None,
    }
}

pub fn rank_comebacks(matches: &[MatchRecord]) -> Vec<ComebackCount> {
    let mut counts: Vec<ComebackCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for team in matches.iter().filter_map(comeback_winner) {
        match index.get(team) {
            Some(&i) => counts[i].comebacks += 1,
            None => {
                index.insert(team, counts.len());
                counts.push(ComebackCount {
                    team: team.to_string(),
                    comebacks: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.comebacks.cmp(&a.comebacks));
    counts
}
