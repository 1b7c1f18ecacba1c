//! The multi-page collect loop.
//!
//! Pages are fetched sequentially, in increasing index order. A page's
//! failure is captured into the run's report and never aborts the run: the
//! Collection concatenates the successful pages' records and nothing else.

use std::time::Duration;

use pagegather_core::{Collection, SourceConfig};

use crate::client::ListingClient;
use crate::error::CollectError;
use crate::extract::extract_records;

/// One page's captured failure: which page, and why.
#[derive(Debug)]
pub struct PageFailure {
    /// 1-based page index.
    pub page: u32,
    pub error: CollectError,
}

/// Diagnostic side channel for one collect run.
///
/// The report never influences the Collection's contents; callers that only
/// want the rows can ignore it.
#[derive(Debug, Default)]
pub struct CollectReport {
    /// Number of pages requested, successful or not.
    pub pages_attempted: u32,
    pub failures: Vec<PageFailure>,
}

impl CollectReport {
    #[must_use]
    pub fn pages_failed(&self) -> usize {
        self.failures.len()
    }

    /// `true` when every attempted page was fetched and extracted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A collect run's output: the rows, plus the per-page diagnostics.
#[derive(Debug)]
pub struct Harvest {
    pub collection: Collection,
    pub report: CollectReport,
}

impl ListingClient {
    /// Collects item records from `page_count` sequential pages of a listing
    /// endpoint.
    ///
    /// Page-level failures (network errors, timeouts, non-2xx statuses after
    /// retries) are isolated: the failed page contributes zero records, its
    /// failure is recorded in the report, and the remaining pages are still
    /// processed. The returned Collection is unlabeled; use
    /// [`Self::collect_source`] to tag rows with a source label.
    ///
    /// # Errors
    ///
    /// - [`CollectError::ZeroPages`]: `page_count` is zero.
    /// - [`CollectError::InvalidEndpoint`]: `endpoint` is not a valid URL.
    ///
    /// No page-level failure ever surfaces as an `Err`.
    pub async fn collect(
        &self,
        endpoint: &str,
        page_count: u32,
    ) -> Result<Harvest, CollectError> {
        if page_count == 0 {
            return Err(CollectError::ZeroPages);
        }
        // A bad endpoint would fail every page the same way; reject it up
        // front instead of reporting `page_count` identical failures.
        Self::page_url(endpoint, 1)?;

        let mut collection = Collection::default();
        let mut report = CollectReport::default();

        for page in 1..=page_count {
            if page > 1 && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }

            report.pages_attempted += 1;

            match self.fetch_page(endpoint, page).await {
                Ok(body) => {
                    let records = extract_records(&body, &self.selectors);
                    tracing::debug!(page, records = records.len(), "page extracted");
                    collection.extend_from_page(records);
                }
                Err(error) => {
                    tracing::warn!(page, error = %error, "page failed, skipping");
                    report.failures.push(PageFailure { page, error });
                }
            }
        }

        Ok(Harvest { collection, report })
    }

    /// Runs [`Self::collect`] for one configured source and tags every row
    /// with the source's label.
    ///
    /// # Errors
    ///
    /// Propagates the constructor-class errors of [`Self::collect`]; page
    /// failures stay in the report here too.
    pub async fn collect_source(&self, source: &SourceConfig) -> Result<Harvest, CollectError> {
        tracing::info!(
            label = %source.label,
            endpoint = %source.endpoint,
            pages = source.pages,
            "collecting source"
        );

        let Harvest { collection, report } = self.collect(&source.endpoint, source.pages).await?;

        tracing::info!(
            label = %source.label,
            rows = collection.len(),
            pages_failed = report.pages_failed(),
            "source collected"
        );

        Ok(Harvest {
            collection: collection.with_source_label(source.label.as_str()),
            report,
        })
    }
}
