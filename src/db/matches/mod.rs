pub mod get;
pub mod post;
pub mod put;

use crate::errors::AppError;

/// Counts are validated as non-negative and within `i32` before they get here.
pub(crate) fn to_db_count(field: &str, value: u32) -> Result<i32, AppError> {
    i32::try_from(value).map_err(|_| AppError::BadRequest(format!("{} is out of range", field)))
}
