#![allow(dead_code)]

use chrono::NaiveDate;
use league_analytics::{
    db::MatchRepository,
    models::{MatchRecord, MatchResult, NewMatch, Season},
};

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("test dates are yyyy-mm-dd")
}

/// One played match, described the way a results sheet would.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub date: &'static str,
    pub home: &'static str,
    pub away: &'static str,
    pub home_goals: u32,
    pub away_goals: u32,
    pub half_time: Option<MatchResult>,
    pub referee: Option<&'static str>,
    pub yellow: (u32, u32),
    pub red: (u32, u32),
}

impl Fixture {
    pub fn new(
        date: &'static str,
        home: &'static str,
        away: &'static str,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            date,
            home,
            away,
            home_goals,
            away_goals,
            half_time: None,
            referee: Some("Michael Oliver"),
            yellow: (0, 0),
            red: (0, 0),
        }
    }

    pub fn half_time(mut self, result: MatchResult) -> Self {
        self.half_time = Some(result);
        self
    }

    pub fn referee(mut self, referee: Option<&'static str>) -> Self {
        self.referee = referee;
        self
    }

    pub fn cards(mut self, yellow: (u32, u32), red: (u32, u32)) -> Self {
        self.yellow = yellow;
        self.red = red;
        self
    }

    pub fn full_time(&self) -> MatchResult {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => MatchResult::Home,
            std::cmp::Ordering::Less => MatchResult::Away,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }

    pub fn record(&self, id: i32) -> MatchRecord {
        MatchRecord {
            id,
            season_id: 1,
            date: date(self.date),
            home_team: self.home.to_string(),
            away_team: self.away.to_string(),
            referee: self.referee.map(str::to_string),
            full_time_result: self.full_time(),
            half_time_result: self.half_time,
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            home_yellow_cards: self.yellow.0,
            away_yellow_cards: self.yellow.1,
            home_red_cards: self.red.0,
            away_red_cards: self.red.1,
        }
    }
}

/// Records numbered from 1 in the order given.
pub fn records(fixtures: &[Fixture]) -> Vec<MatchRecord> {
    fixtures
        .iter()
        .enumerate()
        .map(|(i, f)| f.record(i as i32 + 1))
        .collect()
}

pub async fn seed_season(
    repo: &dyn MatchRepository,
    name: &str,
    start: &str,
    end: &str,
) -> Season {
    repo.find_or_create_season(name, date(start), date(end))
        .await
        .expect("season is created")
}

pub async fn seed(repo: &dyn MatchRepository, season: &Season, fixtures: &[Fixture]) {
    for f in fixtures {
        let home_team = repo.find_or_create_team(f.home).await.expect("home team");
        let away_team = repo.find_or_create_team(f.away).await.expect("away team");
        let referee = match f.referee {
            Some(name) => Some(repo.find_or_create_referee(name).await.expect("referee")),
            None => None,
        };

        repo.create_match(NewMatch {
            season: season.clone(),
            date: date(f.date),
            home_team,
            away_team,
            referee,
            full_time_result: f.full_time(),
            half_time_result: f.half_time,
            home_goals: f.home_goals,
            away_goals: f.away_goals,
            home_yellow_cards: f.yellow.0,
            away_yellow_cards: f.yellow.1,
            home_red_cards: f.red.0,
            away_red_cards: f.red.1,
        })
        .await
        .expect("match is stored");
    }
}
