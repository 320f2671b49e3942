use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_GAP_DAYS: i64 = 90;

/// A run of match dates with no gap wider than the threshold between neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonSegment {
    pub segment_id: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SeasonSegment {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Splits match dates into inferred seasons. A new segment opens whenever the distance from
/// the running segment's last date exceeds `gap_days`. Segment ids start at 1.
pub fn segment_dates<I>(dates: I, gap_days: i64) -> Vec<SeasonSegment>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
    dates.sort_unstable();

    let mut segments: Vec<SeasonSegment> = Vec::new();

    for date in dates {
        match segments.last_mut() {
            Some(current) if (date - current.end_date).num_days() <= gap_days => {
                current.end_date = date;
            }
            _ => {
                let segment_id = segments.len() as u32 + 1;
                segments.push(SeasonSegment {
                    segment_id,
                    start_date: date,
                    end_date: date,
                });
            }
        }
    }

    segments
}

/// Segments are sorted and disjoint, so at most one can contain `date`.
pub fn find_segment(segments: &[SeasonSegment], date: NaiveDate) -> Option<&SeasonSegment> {
    let idx = segments.partition_point(|s| s.end_date < date);
    segments.get(idx).filter(|s| s.contains(date))
}
