use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LitmapError {
    #[error("Failed to read dataset artifact at {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset artifact at {path}: {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported dataset schema version {found} at {path} (this build supports version {supported})")]
    SchemaVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LitmapError>;
