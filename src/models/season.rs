use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Season {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Picks the season covering `date`. Overlapping seasons resolve to the latest start, then lowest id.
pub fn select_covering(seasons: &[Season], date: NaiveDate) -> Option<&Season> {
    seasons
        .iter()
        .filter(|s| s.contains(date))
        .min_by(|a, b| b.start_date.cmp(&a.start_date).then(a.id.cmp(&b.id)))
}
