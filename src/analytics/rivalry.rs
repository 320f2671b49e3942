use std::collections::HashMap;

use serde::Serialize;

use crate::models::MatchRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rivalry {
    pub rivalry: String,
    pub total_yellow_cards: u64,
    pub total_red_cards: u64,
    pub intensity_score: u64,
}

/// "A vs B" with the names in lexicographic order, so both fixtures share a bucket.
pub fn rivalry_key(team_a: &str, team_b: &str) -> String {
    if team_a <= team_b {
        format!("{} vs {}", team_a, team_b)
    } else {
        format!("{} vs {}", team_b, team_a)
    }
}

/// yellow + 2 * red
pub fn intensity_score(yellow_cards: u64, red_cards: u64) -> u64 {
    yellow_cards + 2 * red_cards
}

/// Every pairing in the history, most card-heavy first.
pub fn rank_rivalries(matches: &[MatchRecord]) -> Vec<Rivalry> {
    let mut rivalries: Vec<Rivalry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for m in matches {
        let key = rivalry_key(&m.home_team, &m.away_team);
        let i = *index.entry(key.clone()).or_insert_with(|| {
            rivalries.push(Rivalry {
                rivalry: key,
                total_yellow_cards: 0,
                total_red_cards: 0,
                intensity_score: 0,
            });
            rivalries.len() - 1
        });

        let entry = &mut rivalries[i];
        entry.total_yellow_cards +=
            u64::from(m.home_yellow_cards) + u64::from(m.away_yellow_cards);
        entry.total_red_cards += u64::from(m.home_red_cards) + u64::from(m.away_red_cards);
    }

    for r in rivalries.iter_mut() {
        r.intensity_score = intensity_score(r.total_yellow_cards, r.total_red_cards);
    }

    rivalries.sort_by(|a, b| b.intensity_score.cmp(&a.intensity_score));
    rivalries
}
