use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GardenerError>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum GardenerError {
    #[error("failed to request {url}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to decode the response from {url}")]
    DecodeError {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("unexpected page structure at {url}: {message}")]
    ParseError { url: String, message: String },
    #[error("code block {index} at {url} is empty")]
    EmptyContentError { url: String, index: usize },
    #[error("file operation failed at {}", path.display())]
    IOError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("version control operation failed at {}", path.display())]
    VCSError {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },
    #[error("invalid configuration {}: {message}", path.display())]
    ConfigError { path: PathBuf, message: String },
}

impl GardenerError {
    pub fn network(url: impl ToString, source: reqwest::Error) -> Self {
        if source.is_decode() {
            return GardenerError::DecodeError {
                url: url.to_string(),
                source: Box::new(source),
            };
        }
        GardenerError::NetworkError {
            url: url.to_string(),
            source,
        }
    }

    pub fn decode(url: impl ToString, source: impl Into<BoxError>) -> Self {
        GardenerError::DecodeError {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        GardenerError::IOError {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn vcs(path: &Path, source: git2::Error) -> Self {
        GardenerError::VCSError {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(path: &Path, message: impl ToString) -> Self {
        GardenerError::ConfigError {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}
