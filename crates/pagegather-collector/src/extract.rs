//! Structural extraction of title/date pairs from a listing page.
//!
//! A listing page exposes one "card title" element and one "muted date"
//! element per entry. The i-th title pairs with the i-th date in document
//! order. When the two counts disagree the page is truncated to the shorter
//! count: the aligned prefix is paired and kept, the surplus elements are
//! dropped, and a warning records both counts. A mismatch is page-local
//! noise, not grounds to reject the whole page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use pagegather_core::ItemRecord;

use crate::error::CollectError;

/// First run of four consecutive digits anywhere in the displayed date.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("valid regex"));

pub const DEFAULT_TITLE_SELECTOR: &str = ".card-title";
pub const DEFAULT_DATE_SELECTOR: &str = ".text-muted";

/// The CSS selector pair locating each entry's title and displayed date.
#[derive(Debug, Clone)]
pub struct Selectors {
    title: Selector,
    date: Selector,
}

impl Selectors {
    /// Builds a selector pair from CSS selector strings.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::InvalidSelector`] if either string is not a
    /// valid CSS selector.
    pub fn new(title: &str, date: &str) -> Result<Self, CollectError> {
        let parse = |s: &str| {
            Selector::parse(s).map_err(|e| CollectError::InvalidSelector {
                selector: s.to_owned(),
                reason: e.to_string(),
            })
        };
        Ok(Self {
            title: parse(title)?,
            date: parse(date)?,
        })
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE_SELECTOR, DEFAULT_DATE_SELECTOR).expect("valid default selectors")
    }
}

/// Extracts the title/date pairs from one listing page's HTML.
///
/// Returns zero records for a page with no matching elements; that is a
/// well-formed empty page, not an error. Parsing never fails: `scraper`
/// produces a best-effort DOM for any input.
#[must_use]
pub fn extract_records(html: &str, selectors: &Selectors) -> Vec<ItemRecord> {
    let document = Html::parse_document(html);

    let titles: Vec<String> = document
        .select(&selectors.title)
        .map(element_text)
        .collect();
    let dates: Vec<String> = document.select(&selectors.date).map(element_text).collect();

    if titles.len() != dates.len() {
        tracing::warn!(
            titles = titles.len(),
            dates = dates.len(),
            "title/date element counts disagree, truncating to the aligned prefix"
        );
    }

    titles
        .into_iter()
        .zip(dates)
        .map(|(title, raw_date)| {
            let year = extract_year(&raw_date);
            ItemRecord {
                title,
                raw_date,
                year,
            }
        })
        .collect()
}

/// Derives the 4-digit year from a displayed date: the first run of four
/// consecutive digits wins. Returns `None` when no such run exists.
#[must_use]
pub fn extract_year(raw_date: &str) -> Option<String> {
    YEAR_RE
        .find(raw_date)
        .map(|m| m.as_str().to_owned())
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
