//! Film dataset loading.

use std::fs;
use std::path::Path;

use super::Film;
use crate::error::{MarqueeError, Result};

/// One-shot loader for the film dataset.
///
/// The dataset is retrieved exactly once at startup, either from an HTTP(S)
/// endpoint or from a local JSON file. A failure is reported to the caller
/// and never retried.
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load the dataset from a URL or a filesystem path.
    pub fn load(source: &str) -> Result<Vec<Film>> {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::load_url(source)
        } else {
            Self::load_file(Path::new(source))
        }
    }

    fn load_url(url: &str) -> Result<Vec<Film>> {
        let response = reqwest::blocking::get(url).map_err(|e| MarqueeError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarqueeError::status(url, status.as_u16()));
        }

        let body = response.text().map_err(|e| MarqueeError::fetch(url, e))?;
        Self::parse(&body)
    }

    fn load_file(path: &Path) -> Result<Vec<Film>> {
        let body = fs::read_to_string(path)
            .map_err(|e| MarqueeError::data_file(path.to_path_buf(), e))?;
        Self::parse(&body)
    }

    fn parse(body: &str) -> Result<Vec<Film>> {
        let films: Vec<Film> = serde_json::from_str(body)?;
        tracing::info!("Loaded {} films", films.len());
        Ok(films)
    }
}
