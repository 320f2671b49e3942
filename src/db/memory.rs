//! Repository kept entirely in process memory. Used when no `DATABASE_URL` is configured
//! and by the test suite.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::{
    db::{MatchFilter, MatchRepository},
    errors::AppError,
    models::{
        MatchRecord, NewMatch, Referee, Season, Team, entry::duplicate_match_error,
        season::select_covering,
    },
};

#[derive(Debug, Default)]
struct Store {
    teams: Vec<Team>,
    referees: Vec<Referee>,
    seasons: Vec<Season>,
    matches: Vec<MatchRecord>,
}

impl Store {
    fn next_match_id(&self) -> i32 {
        self.matches.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: RwLock<Store>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchRepository for InMemoryRepository {
    async fn matches(&self, filter: &MatchFilter) -> Result<Vec<MatchRecord>, AppError> {
        let store = self.store.read().await;
        let mut selected: Vec<MatchRecord> = store
            .matches
            .iter()
            .filter(|m| filter.accepts(m))
            .cloned()
            .collect();
        selected.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(selected)
    }

    async fn match_dates(&self) -> Result<Vec<NaiveDate>, AppError> {
        let store = self.store.read().await;
        let mut dates: Vec<NaiveDate> = store.matches.iter().map(|m| m.date).collect();
        dates.sort_unstable();
        Ok(dates)
    }

    async fn seasons(&self) -> Result<Vec<Season>, AppError> {
        let store = self.store.read().await;
        let mut seasons = store.seasons.clone();
        seasons.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(seasons)
    }

    async fn season_covering(&self, date: NaiveDate) -> Result<Option<Season>, AppError> {
        let store = self.store.read().await;
        Ok(select_covering(&store.seasons, date).cloned())
    }

    async fn season_by_name(&self, name: &str) -> Result<Option<Season>, AppError> {
        let store = self.store.read().await;
        Ok(store.seasons.iter().find(|s| s.name == name).cloned())
    }

    async fn find_or_create_team(&self, name: &str) -> Result<Team, AppError> {
        let mut store = self.store.write().await;
        if let Some(team) = store.teams.iter().find(|t| t.name == name) {
            return Ok(team.clone());
        }
        let team = Team {
            id: store.teams.len() as i32 + 1,
            name: name.to_string(),
        };
        store.teams.push(team.clone());
        Ok(team)
    }

    async fn find_or_create_referee(&self, name: &str) -> Result<Referee, AppError> {
        let mut store = self.store.write().await;
        if let Some(referee) = store.referees.iter().find(|r| r.name == name) {
            return Ok(referee.clone());
        }
        let referee = Referee {
            id: store.referees.len() as i32 + 1,
            name: name.to_string(),
        };
        store.referees.push(referee.clone());
        Ok(referee)
    }

    async fn find_or_create_season(
        &self,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Season, AppError> {
        let mut store = self.store.write().await;
        if let Some(season) = store.seasons.iter().find(|s| s.name == name) {
            return Ok(season.clone());
        }
        if end_date < start_date {
            return Err(AppError::BadRequest(
                "Season end date must not be before its start date".into(),
            ));
        }
        let season = Season {
            id: store.seasons.len() as i32 + 1,
            name: name.to_string(),
            start_date,
            end_date,
        };
        store.seasons.push(season.clone());
        Ok(season)
    }

    async fn create_match(&self, new_match: NewMatch) -> Result<MatchRecord, AppError> {
        let mut store = self.store.write().await;
        let clash = store.matches.iter().any(|m| {
            m.date == new_match.date
                && m.home_team == new_match.home_team.name
                && m.away_team == new_match.away_team.name
        });
        if clash {
            return Err(duplicate_match_error());
        }
        let record = new_match.into_record(store.next_match_id());
        store.matches.push(record.clone());
        Ok(record)
    }

    async fn upsert_match(&self, new_match: NewMatch) -> Result<(MatchRecord, bool), AppError> {
        let mut store = self.store.write().await;
        let existing = store.matches.iter().position(|m| {
            m.date == new_match.date
                && m.home_team == new_match.home_team.name
                && m.away_team == new_match.away_team.name
        });

        match existing {
            Some(idx) => {
                let record = new_match.into_record(store.matches[idx].id);
                store.matches[idx] = record.clone();
                Ok((record, false))
            }
            None => {
                let record = new_match.into_record(store.next_match_id());
                store.matches.push(record.clone());
                Ok((record, true))
            }
        }
    }

    async fn team_names(&self) -> Result<Vec<String>, AppError> {
        let store = self.store.read().await;
        Ok(store.teams.iter().map(|t| t.name.clone()).collect())
    }

    async fn referee_names(&self) -> Result<Vec<String>, AppError> {
        let store = self.store.read().await;
        Ok(store.referees.iter().map(|r| r.name.clone()).collect())
    }

    async fn season_names(&self) -> Result<Vec<String>, AppError> {
        let store = self.store.read().await;
        Ok(store.seasons.iter().map(|s| s.name.clone()).collect())
    }
}
