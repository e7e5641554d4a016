//! Filter option indexing.

use std::collections::BTreeSet;

use super::Film;

/// Distinct filter choices derived from the full collection.
///
/// Built once after a successful load and never updated afterwards, since the
/// collection itself never changes.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Selectable years, newest first.
    pub years: Vec<i32>,
    /// Selectable countries, alphabetical.
    pub countries: Vec<String>,
}

impl FilterOptions {
    /// Scan a collection for its distinct years and countries.
    ///
    /// Multi-country fields are split on commas so each country is selectable
    /// on its own.
    pub fn index(films: &[Film]) -> Self {
        let mut years = BTreeSet::new();
        let mut countries = BTreeSet::new();

        for film in films {
            if let Some(year) = film.release_year {
                years.insert(year);
            }

            if let Some(country) = &film.country {
                if !country.trim().is_empty() {
                    for segment in country.split(',') {
                        let segment = segment.trim();
                        if !segment.is_empty() {
                            countries.insert(segment.to_string());
                        }
                    }
                }
            }
        }

        Self {
            years: years.into_iter().rev().collect(),
            countries: countries.into_iter().collect(),
        }
    }
}
