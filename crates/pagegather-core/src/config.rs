//! Collector configuration.
//!
//! Built programmatically by the caller; there is no environment-variable or
//! file-based loading for these knobs. [`CollectorConfig::default`] carries
//! values suitable for polite scraping of a public listing endpoint.

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Per-request timeout in seconds. Expiry counts as a page-level failure.
    pub request_timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// `User-Agent` sent with every page request.
    pub user_agent: String,
    /// Number of additional attempts after the first failure for retriable
    /// errors (429, network errors). `0` disables retries.
    pub max_retries: u32,
    /// Base delay for exponential backoff: the wait before the n-th retry is
    /// `retry_backoff_base_secs * 2^(n-1)` seconds.
    pub retry_backoff_base_secs: u64,
    /// Politeness delay between page requests, applied after every page
    /// except the first.
    pub inter_request_delay_ms: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: "pagegather/0.1 (listing-collector)".to_owned(),
            max_retries: 3,
            retry_backoff_base_secs: 1,
            inter_request_delay_ms: 250,
        }
    }
}

impl CollectorConfig {
    /// Checks the configuration for values that would make every request
    /// fail or hang.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if the request timeout is zero
    /// or the user agent is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "request_timeout_secs must be at least 1".to_owned(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "user_agent must be non-empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
