use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::{
    analytics::segmentation::SeasonSegment,
    errors::AppError,
    models::{MatchRecord, MatchResult, Season},
};

pub const NO_SEASON_FOUND: &str = "No season found for the selected date.";
pub const NO_MATCHES_UP_TO_DATE: &str = "No matches found up to this date.";

/// The season a table is computed for, whether stored or inferred from match dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonWindow {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<&Season> for SeasonWindow {
    fn from(season: &Season) -> Self {
        Self {
            id: season.id,
            name: season.name.clone(),
            start_date: season.start_date,
            end_date: season.end_date,
        }
    }
}

impl From<&SeasonSegment> for SeasonWindow {
    fn from(segment: &SeasonSegment) -> Self {
        let start_year = segment.start_date.year();
        Self {
            id: segment.segment_id as i32,
            name: format!("{}/{}", start_year, start_year + 1),
            start_date: segment.start_date,
            end_date: segment.end_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamStanding {
    pub team: String,
    pub points: u32,
    pub goal_difference: i64,
    pub goals_scored: u64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_conceded: u64,
    pub rank: u32,
}

impl TeamStanding {
    fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            ..Default::default()
        }
    }

    fn record(&mut self, scored: u32, conceded: u32, outcome: Outcome) {
        self.goals_scored += u64::from(scored);
        self.goals_conceded += u64::from(conceded);
        self.goal_difference += i64::from(scored) - i64::from(conceded);

        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.points += 3;
            }
            Outcome::Draw => {
                self.draws += 1;
                self.points += 1;
            }
            Outcome::Loss => self.losses += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    pub season_id: i32,
    pub season_name: String,
    pub season_start_date: NaiveDate,
    pub season_end_date: NaiveDate,
    pub number_of_teams: usize,
    pub standings: Vec<TeamStanding>,
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Win,
    Draw,
    Loss,
}

/// Points, then goal difference, then goals scored. Equal rows compare equal so a stable
/// sort leaves them in the order teams first appeared.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_scored.cmp(&a.goals_scored))
}

/// Builds the ranked table for `window` from matches already narrowed to that season and
/// the as-of date.
pub fn compute_standings(
    window: &SeasonWindow,
    matches: &[MatchRecord],
) -> Result<Standings, AppError> {
    if matches.is_empty() {
        return Err(AppError::NotFound(NO_MATCHES_UP_TO_DATE.into()));
    }

    let mut rows: Vec<TeamStanding> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut teams: HashSet<&str> = HashSet::new();

    for m in matches {
        teams.insert(&m.home_team);
        teams.insert(&m.away_team);

        let (home_outcome, away_outcome) = match m.full_time_result {
            MatchResult::Home => (Outcome::Win, Outcome::Loss),
            MatchResult::Away => (Outcome::Loss, Outcome::Win),
            MatchResult::Draw => (Outcome::Draw, Outcome::Draw),
        };

        let home = row_for(&mut rows, &mut index, &m.home_team);
        rows[home].record(m.home_goals, m.away_goals, home_outcome);

        let away = row_for(&mut rows, &mut index, &m.away_team);
        rows[away].record(m.away_goals, m.home_goals, away_outcome);
    }

    rows.sort_by(compare_standings);

    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position as u32 + 1;
    }

    Ok(Standings {
        season_id: window.id,
        season_name: window.name.clone(),
        season_start_date: window.start_date,
        season_end_date: window.end_date,
        number_of_teams: teams.len(),
        standings: rows,
    })
}

fn row_for(rows: &mut Vec<TeamStanding>, index: &mut HashMap<String, usize>, team: &str) -> usize {
    if let Some(&i) = index.get(team) {
        return i;
    }
    rows.push(TeamStanding::new(team));
    index.insert(team.to_string(), rows.len() - 1);
    rows.len() - 1
}
