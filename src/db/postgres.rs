use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    db::{
        MatchFilter, MatchRepository,
        matches::{
            get::{get_match_dates, get_matches},
            post::insert_match,
            put::upsert_match,
        },
        referee::{get::get_referee_names, post::find_or_create_referee},
        season::{
            get::{get_all_seasons, get_season_by_name, get_season_covering, get_season_names},
            post::find_or_create_season,
        },
        team::{get::get_team_names, post::find_or_create_team},
    },
    errors::AppError,
    models::{MatchRecord, NewMatch, Referee, Season, Team},
};

#[derive(Clone)]
pub struct PgRepository {
    postgres: PgPool,
}

impl PgRepository {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.postgres).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl MatchRepository for PgRepository {
    async fn matches(&self, filter: &MatchFilter) -> Result<Vec<MatchRecord>, AppError> {
        get_matches(filter, &self.postgres).await
    }

    async fn match_dates(&self) -> Result<Vec<NaiveDate>, AppError> {
        get_match_dates(&self.postgres).await
    }

    async fn seasons(&self) -> Result<Vec<Season>, AppError> {
        get_all_seasons(&self.postgres).await
    }

    async fn season_covering(&self, date: NaiveDate) -> Result<Option<Season>, AppError> {
        get_season_covering(date, &self.postgres).await
    }

    async fn season_by_name(&self, name: &str) -> Result<Option<Season>, AppError> {
        get_season_by_name(name, &self.postgres).await
    }

    async fn find_or_create_team(&self, name: &str) -> Result<Team, AppError> {
        find_or_create_team(name, &self.postgres).await
    }

    async fn find_or_create_referee(&self, name: &str) -> Result<Referee, AppError> {
        find_or_create_referee(name, &self.postgres).await
    }

    async fn find_or_create_season(
        &self,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Season, AppError> {
        find_or_create_season(name, start_date, end_date, &self.postgres).await
    }

    async fn create_match(&self, new_match: NewMatch) -> Result<MatchRecord, AppError> {
        insert_match(new_match, &self.postgres).await
    }

    async fn upsert_match(&self, new_match: NewMatch) -> Result<(MatchRecord, bool), AppError> {
        upsert_match(new_match, &self.postgres).await
    }

    async fn team_names(&self) -> Result<Vec<String>, AppError> {
        get_team_names(&self.postgres).await
    }

    async fn referee_names(&self) -> Result<Vec<String>, AppError> {
        get_referee_names(&self.postgres).await
    }

    async fn season_names(&self) -> Result<Vec<String>, AppError> {
        get_season_names(&self.postgres).await
    }
}
