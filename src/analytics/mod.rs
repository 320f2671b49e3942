//! Pure aggregations over a match history. Nothing in here touches storage; callers select
//! the matches and hand over a slice ordered by date.

pub mod comeback;
pub mod head_to_head;
pub mod referee_impact;
pub mod rivalry;
pub mod segmentation;
pub mod standings;

use serde::Serializer;

use crate::errors::AppError;

pub const LIMIT_NOT_INTEGER: &str = "Limit must be an integer.";

/// Rounds to two decimal places. Only applied when a value leaves the service.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn serialize_round2<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round2(*value))
}

/// `sum / count`, or 0 when there is nothing to average.
pub(crate) fn mean(sum: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Parses the optional `limit` query value. Absent and empty both mean "no limit".
pub fn parse_limit(raw: Option<&str>) -> Result<Option<i64>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::BadRequest(LIMIT_NOT_INTEGER.into())),
    }
}

/// Prefix slice `[..limit]`: a negative limit drops that many entries from the end.
pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<i64>) -> Vec<T> {
    let Some(limit) = limit else {
        return items;
    };

    let keep = if limit >= 0 {
        usize::try_from(limit).unwrap_or(usize::MAX).min(items.len())
    } else {
        let drop = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
        items.len().saturating_sub(drop)
    };

    items.truncate(keep);
    items
}
