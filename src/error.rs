use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JpdataError>;

#[derive(Error, Debug)]
pub enum JpdataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("Download failed: {url}")]
    DownloadError { url: String },

    #[error("No release tag in redirect URL: {url}")]
    TagNotFound { url: String },

    #[error("Unsupported archive format: {path}")]
    UnsupportedArchive { path: PathBuf },

    #[error("Expected a single archived file in {path}, found {count}")]
    MultipleMembers { path: PathBuf, count: usize },

    #[error("Extraction failed: {path}")]
    ExtractionError { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}
