//! The in-memory query engine.

use std::cmp::Ordering;

use super::{Criteria, SortKey};
use crate::data::Film;

/// Produce the filtered, ordered result set for the given criteria.
///
/// The pipeline re-runs wholesale on every criteria change; the collection is
/// small and static, so nothing incremental is attempted.
pub fn apply(films: &[Film], criteria: &Criteria) -> Vec<Film> {
    let mut results: Vec<Film> = films
        .iter()
        .filter(|film| criteria.matches(film))
        .cloned()
        .collect();

    sort(&mut results, criteria.sort);
    results
}

// `sort_by` is stable, so ties keep their input order.
fn sort(films: &mut [Film], key: SortKey) {
    match key {
        SortKey::BoxOfficeDesc => {
            films.sort_by(|a, b| b.box_office_or_zero().total_cmp(&a.box_office_or_zero()))
        }
        SortKey::BoxOfficeAsc => {
            films.sort_by(|a, b| a.box_office_or_zero().total_cmp(&b.box_office_or_zero()))
        }
        SortKey::YearDesc => films.sort_by(|a, b| b.year_or_zero().cmp(&a.year_or_zero())),
        SortKey::YearAsc => films.sort_by(|a, b| a.year_or_zero().cmp(&b.year_or_zero())),
        SortKey::TitleAsc => films.sort_by(title_cmp),
        SortKey::TitleDesc => films.sort_by(|a, b| title_cmp(b, a)),
    }
}

fn title_cmp(a: &Film, b: &Film) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}
