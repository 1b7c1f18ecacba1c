//! HTTP client for paginated listing endpoints.

use std::time::Duration;

use reqwest::Client;

use pagegather_core::CollectorConfig;

use crate::error::CollectError;
use crate::extract::Selectors;
use crate::retry::retry_with_backoff;

/// HTTP client for a paginated HTML listing endpoint.
///
/// Fetches one page at a time by appending a 1-based `page` query parameter
/// to the base endpoint. Rate limiting (429) and other non-2xx responses are
/// reported as typed errors; transient errors (429, network failures) are
/// automatically retried with exponential backoff up to `max_retries`
/// additional attempts.
pub struct ListingClient {
    pub(crate) client: Client,
    pub(crate) selectors: Selectors,
    pub(crate) max_retries: u32,
    pub(crate) backoff_base_secs: u64,
    pub(crate) inter_request_delay_ms: u64,
}

impl ListingClient {
    /// Creates a `ListingClient` with the configured timeouts, `User-Agent`,
    /// retry policy, and extraction selectors.
    ///
    /// # Errors
    ///
    /// - [`CollectError::Config`] if `config` fails validation.
    /// - [`CollectError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(config: &CollectorConfig, selectors: Selectors) -> Result<Self, CollectError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            selectors,
            max_retries: config.max_retries,
            backoff_base_secs: config.retry_backoff_base_secs,
            inter_request_delay_ms: config.inter_request_delay_ms,
        })
    }

    /// Fetches one listing page and returns its HTML body, with automatic
    /// retry on transient errors.
    ///
    /// # Errors
    ///
    /// - [`CollectError::InvalidEndpoint`]: `endpoint` is not a valid URL.
    /// - [`CollectError::RateLimited`]: HTTP 429 after all retries exhausted.
    /// - [`CollectError::UnexpectedStatus`]: any other non-2xx status (not retried).
    /// - [`CollectError::Http`]: network or timeout failure after all retries exhausted.
    pub async fn fetch_page(&self, endpoint: &str, page: u32) -> Result<String, CollectError> {
        let url = Self::page_url(endpoint, page)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(
                        reqwest::header::ACCEPT,
                        "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
                    )
                    .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);

                    return Err(CollectError::RateLimited {
                        url,
                        retry_after_secs,
                    });
                }

                if !status.is_success() {
                    return Err(CollectError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await
    }

    /// Builds the address of one listing page by appending a 1-based `page`
    /// query parameter to the base endpoint. An endpoint that already carries
    /// a query string keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::InvalidEndpoint`] if `endpoint` cannot be
    /// parsed as an absolute URL.
    pub(crate) fn page_url(endpoint: &str, page: u32) -> Result<String, CollectError> {
        let mut url =
            reqwest::Url::parse(endpoint).map_err(|e| CollectError::InvalidEndpoint {
                endpoint: endpoint.to_owned(),
                reason: e.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("page", &page.to_string());

        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
