use thiserror::Error;

pub mod config;
pub mod record;
pub mod sources;

pub use config::CollectorConfig;
pub use record::{Collection, ItemRecord};
pub use sources::{load_sources, SourceConfig, SourcesFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read sources file {path}: {source}")]
    SourcesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sources file: {0}")]
    SourcesFileParse(#[from] serde_yaml::Error),

    #[error("invalid sources file: {0}")]
    Validation(String),

    #[error("invalid collector config: {0}")]
    InvalidConfig(String),
}
