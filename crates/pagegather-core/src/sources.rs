//! Listing source registry.
//!
//! The collect-then-label sequence is repeated over several near-identical
//! listing sources; rather than hard-coding them, sources are declared in a
//! YAML file:
//!
//! ```yaml
//! sources:
//!   - label: data-is-plural
//!     endpoint: "https://example.org/archive"
//!     pages: 5
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One paginated listing endpoint and the label its rows are tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Constant tag attached to every row collected from this source.
    pub label: String,
    /// Base listing URL; the collector appends a 1-based `page` query
    /// parameter.
    pub endpoint: String,
    /// Number of sequential pages to request.
    pub pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct SourcesFile {
    pub sources: Vec<SourceConfig>,
}

/// Load and validate the source registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_sources(path: &Path) -> Result<SourcesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SourcesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sources_file: SourcesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::SourcesFileParse)?;

    validate_sources(&sources_file)?;

    Ok(sources_file)
}

fn validate_sources(sources_file: &SourcesFile) -> Result<(), ConfigError> {
    if sources_file.sources.is_empty() {
        return Err(ConfigError::Validation(
            "sources file must declare at least one source".to_owned(),
        ));
    }

    let mut seen_labels = HashSet::new();

    for source in &sources_file.sources {
        if source.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "source label must be non-empty".to_owned(),
            ));
        }
        if source.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "source \"{}\" has an empty endpoint",
                source.label
            )));
        }
        if source.pages == 0 {
            return Err(ConfigError::Validation(format!(
                "source \"{}\" must request at least one page",
                source.label
            )));
        }
        if !seen_labels.insert(source.label.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate source label: {}",
                source.label
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "sources_test.rs"]
mod tests;
