//! Error types for Marquee.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;

/// Errors that can occur in Marquee.
///
/// Only the dataset load can fail; every later operation treats missing data
/// through fallback values instead of raising errors.
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Transport failure while fetching the dataset.
    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The dataset endpoint answered with a non-success status.
    #[error("Fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Failed to read a local dataset file.
    #[error("Failed to read dataset file: {path}")]
    DataFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset body is not a valid film listing.
    #[error("Invalid film data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl MarqueeError {
    /// Create a Fetch error.
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Create a Status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a DataFile error.
    pub fn data_file(path: PathBuf, source: std::io::Error) -> Self {
        Self::DataFile { path, source }
    }
}
