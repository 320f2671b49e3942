use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{referee::Referee, season::Season, team::Team};

/// Full-time outcome, or the leading side at half-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "A")]
    Away,
    #[serde(rename = "D")]
    Draw,
}

impl MatchResult {
    pub fn code(&self) -> &'static str {
        match self {
            MatchResult::Home => "H",
            MatchResult::Away => "A",
            MatchResult::Draw => "D",
        }
    }
}

impl FromStr for MatchResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "H" => Ok(MatchResult::Home),
            "A" => Ok(MatchResult::Away),
            "D" => Ok(MatchResult::Draw),
            other => Err(format!("\"{}\" is not a valid choice.", other)),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A stored match with team and referee names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub id: i32,
    pub season_id: i32,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub referee: Option<String>,
    pub full_time_result: MatchResult,
    pub half_time_result: Option<MatchResult>,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_yellow_cards: u32,
    pub away_yellow_cards: u32,
    pub home_red_cards: u32,
    pub away_red_cards: u32,
}

impl MatchRecord {
    pub fn is_between(&self, team_a: &str, team_b: &str) -> bool {
        (self.home_team == team_a && self.away_team == team_b)
            || (self.home_team == team_b && self.away_team == team_a)
    }
}

/// A match ready to be written, with every reference already resolved.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub season: Season,
    pub date: NaiveDate,
    pub home_team: Team,
    pub away_team: Team,
    pub referee: Option<Referee>,
    pub full_time_result: MatchResult,
    pub half_time_result: Option<MatchResult>,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_yellow_cards: u32,
    pub away_yellow_cards: u32,
    pub home_red_cards: u32,
    pub away_red_cards: u32,
}

impl NewMatch {
    pub fn into_record(self, id: i32) -> MatchRecord {
        MatchRecord {
            id,
            season_id: self.season.id,
            date: self.date,
            home_team: self.home_team.name,
            away_team: self.away_team.name,
            referee: self.referee.map(|r| r.name),
            full_time_result: self.full_time_result,
            half_time_result: self.half_time_result,
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            home_yellow_cards: self.home_yellow_cards,
            away_yellow_cards: self.away_yellow_cards,
            home_red_cards: self.home_red_cards,
            away_red_cards: self.away_red_cards,
        }
    }
}
