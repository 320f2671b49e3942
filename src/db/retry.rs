//! Retry for writes that can collide with a concurrent writer on a unique name.

use std::{future::Future, time::Duration};

use tracing::warn;

use crate::errors::AppError;

pub const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF_MS: u64 = 25;

/// Runs `f` until it succeeds, fails with a non-retriable error, or `max_attempts` is spent.
/// Backoff doubles from 25ms between attempts.
pub async fn with_conflict_retry<F, Fut, T>(mut f: F, max_attempts: u32) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt < max_attempts && e.is_retriable() => {
                let backoff_ms = BASE_BACKOFF_MS * 2_u64.pow(attempt - 1);
                warn!(
                    "Write conflicted (attempt {}/{}): {}. Retrying in {}ms",
                    attempt, max_attempts, e, backoff_ms
                );
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
