//! Retry utilities for transient page-fetch errors.
//!
//! Provides exponential backoff retry logic for transient HTTP errors such as
//! 429 Rate Limited responses. Non-retriable errors (non-2xx statuses other
//! than 429, bad endpoints) are propagated immediately without retrying.
//! Exhausting the retries makes the *page* fail; the collect loop decides
//! what that means for the run.

use std::future::Future;
use std::time::Duration;

use crate::error::CollectError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable errors:
/// - [`CollectError::RateLimited`]: HTTP 429; the server has asked us to back off.
/// - [`CollectError::Http`]: network-level failure (connection reset, timeout, etc.).
///
/// Everything else is propagated immediately: a 404 or 500 will return the
/// same answer next time, and endpoint/selector/config errors are caller
/// mistakes, not weather.
fn is_retriable(err: &CollectError) -> bool {
    matches!(
        err,
        CollectError::RateLimited { .. } | CollectError::Http(_)
    )
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps for
/// `backoff_base_secs * 2^attempt` seconds and tries again, up to
/// `max_retries` additional attempts after the first try. If all retries are
/// exhausted the last error is returned. Non-retriable errors are returned
/// immediately without sleeping.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, CollectError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CollectError>>,
{
    let mut last_err;
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                last_err = err;
            }
        }

        // Exponential backoff: base * 2^attempt seconds.
        // Cap the shift to prevent overflow on extreme configs.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %last_err,
            "transient page-fetch error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
