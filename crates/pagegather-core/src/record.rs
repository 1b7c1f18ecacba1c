//! Data model for collected listing entries.
//!
//! An [`ItemRecord`] is one extracted entry from a listing page; a
//! [`Collection`] is the ordered concatenation of all records gathered across
//! the pages of one source, optionally tagged with that source's label.

use serde::{Deserialize, Serialize};

/// One extracted entry from a listing page.
///
/// `year` is derived from `raw_date` by the collector (first run of four
/// consecutive digits) and is absent when `raw_date` carries no such run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    pub raw_date: String,
    pub year: Option<String>,
}

/// All records gathered across the pages of one source, in page order, then
/// within-page document order.
///
/// The label is set once, after all pages for the source have been processed;
/// the collector itself is source-agnostic and produces unlabeled collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    records: Vec<ItemRecord>,
    source_label: Option<String>,
}

impl Collection {
    #[must_use]
    pub fn from_records(records: Vec<ItemRecord>) -> Self {
        Self {
            records,
            source_label: None,
        }
    }

    /// Appends one page's records, preserving their document order.
    pub fn extend_from_page(&mut self, records: Vec<ItemRecord>) {
        self.records.extend(records);
    }

    /// Tags every row in this collection with a constant source label.
    #[must_use]
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    #[must_use]
    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
