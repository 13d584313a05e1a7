use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the validation path: reading inputs and persisting output.
/// Validation problems are reported as `validator::Diagnostic` instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read enum asset {path:?}")]
    ReadAsset {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse enum asset {path:?}")]
    ParseAsset {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read config {path:?}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}")]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("source not found: {path:?}")]
    SourceNotFound { path: PathBuf },

    #[error("invalid glob pattern {pattern:?}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("no output path for \"{file_name}\": the asset has no parent directory")]
    NoOutputPath { file_name: String },

    #[error("failed to write {path:?}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
