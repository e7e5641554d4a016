//! Film records.

use serde::Deserialize;

/// One entry in the film dataset.
///
/// Every field except the title is optional in the source document. Missing
/// numeric fields sort as zero and missing display fields render as
/// "Unknown"; the `country` field may hold a comma-separated list.
#[derive(Debug, Clone, Deserialize)]
pub struct Film {
    /// Film title.
    pub title: String,
    /// Year of first release.
    #[serde(default)]
    pub release_year: Option<i32>,
    /// Director credit.
    #[serde(default)]
    pub director: Option<String>,
    /// Production country, possibly several separated by commas.
    #[serde(default)]
    pub country: Option<String>,
    /// Worldwide gross in US dollars.
    #[serde(default)]
    pub box_office: Option<f64>,
}

impl Film {
    /// Box office gross, with missing values collapsing to zero.
    pub fn box_office_or_zero(&self) -> f64 {
        self.box_office.unwrap_or(0.0)
    }

    /// Release year, with missing values collapsing to zero.
    pub fn year_or_zero(&self) -> i32 {
        self.release_year.unwrap_or(0)
    }

    /// Check whether the title or the director contains a search term.
    ///
    /// The term must already be trimmed and lowercased.
    pub fn matches_search(&self, term: &str) -> bool {
        if self.title.to_lowercase().contains(term) {
            return true;
        }

        if let Some(director) = &self.director {
            if director.to_lowercase().contains(term) {
                return true;
            }
        }

        false
    }
}
