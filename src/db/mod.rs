pub mod entry;
pub mod matches;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod referee;
pub mod retry;
pub mod season;
pub mod team;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    errors::AppError,
    models::{MatchRecord, NewMatch, Referee, Season, Team},
};

pub use entry::add_match;
pub use memory::InMemoryRepository;
pub use postgres::PgRepository;

/// Which matches a query should return. Unset fields don't constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    /// Either side may be either team.
    pub teams: Option<(String, String)>,
    pub referee: Option<String>,
    pub season_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl MatchFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(team_a: &str, team_b: &str) -> Self {
        Self {
            teams: Some((team_a.to_string(), team_b.to_string())),
            ..Self::default()
        }
    }

    pub fn refereed_by(referee: &str) -> Self {
        Self {
            referee: Some(referee.to_string()),
            ..Self::default()
        }
    }

    pub fn in_season(season_id: i32) -> Self {
        Self {
            season_id: Some(season_id),
            ..Self::default()
        }
    }

    pub fn starting(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn up_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn accepts(&self, m: &MatchRecord) -> bool {
        if let Some((a, b)) = &self.teams {
            if !m.is_between(a, b) {
                return false;
            }
        }
        if let Some(referee) = &self.referee {
            if m.referee.as_deref() != Some(referee.as_str()) {
                return false;
            }
        }
        if self.season_id.is_some_and(|id| m.season_id != id) {
            return false;
        }
        if self.date_from.is_some_and(|from| m.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| m.date > to) {
            return false;
        }
        true
    }
}

/// Everything the analytics and the match-entry path need from storage.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Matches passing `filter`, ordered by date then id.
    async fn matches(&self, filter: &MatchFilter) -> Result<Vec<MatchRecord>, AppError>;

    async fn match_dates(&self) -> Result<Vec<NaiveDate>, AppError>;

    async fn seasons(&self) -> Result<Vec<Season>, AppError>;

    async fn season_covering(&self, date: NaiveDate) -> Result<Option<Season>, AppError>;

    async fn season_by_name(&self, name: &str) -> Result<Option<Season>, AppError>;

    async fn find_or_create_team(&self, name: &str) -> Result<Team, AppError>;

    async fn find_or_create_referee(&self, name: &str) -> Result<Referee, AppError>;

    /// Returns the existing season unchanged when `name` is already taken.
    async fn find_or_create_season(
        &self,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Season, AppError>;

    async fn create_match(&self, new_match: NewMatch) -> Result<MatchRecord, AppError>;

    /// Insert-or-update keyed on (date, home team, away team), used by bulk loaders.
    /// The flag is true on insert.
    async fn upsert_match(&self, new_match: NewMatch) -> Result<(MatchRecord, bool), AppError>;

    async fn team_names(&self) -> Result<Vec<String>, AppError>;

    async fn referee_names(&self) -> Result<Vec<String>, AppError>;

    async fn season_names(&self) -> Result<Vec<String>, AppError>;
}
