use std::sync::Arc;

use crate::{analytics::segmentation::DEFAULT_GAP_DAYS, db::MatchRepository};

#[derive(Clone)]
pub struct AppState {
    pub repo: MatchRepo,
    pub season_gap_days: i64,
}

impl AppState {
    pub fn new(repo: MatchRepo) -> Self {
        Self {
            repo,
            season_gap_days: DEFAULT_GAP_DAYS,
        }
    }

    pub fn with_season_gap_days(mut self, days: i64) -> Self {
        self.season_gap_days = days;
        self
    }
}

pub type MatchRepo = Arc<dyn MatchRepository>;
