//! Query criteria.

use crate::data::Film;

/// Sort orders for the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Box office, highest first.
    #[default]
    BoxOfficeDesc,
    /// Box office, lowest first.
    BoxOfficeAsc,
    /// Release year, newest first.
    YearDesc,
    /// Release year, oldest first.
    YearAsc,
    /// Title, A to Z.
    TitleAsc,
    /// Title, Z to A.
    TitleDesc,
}

impl SortKey {
    /// Parse a sort key, falling back to the default for unknown input.
    pub fn parse(value: &str) -> Self {
        match value {
            "box_office_desc" => SortKey::BoxOfficeDesc,
            "box_office_asc" => SortKey::BoxOfficeAsc,
            "year_desc" => SortKey::YearDesc,
            "year_asc" => SortKey::YearAsc,
            "title_asc" => SortKey::TitleAsc,
            "title_desc" => SortKey::TitleDesc,
            _ => SortKey::default(),
        }
    }

    /// Get the next key in the cycle.
    pub fn next(self) -> Self {
        match self {
            SortKey::BoxOfficeDesc => SortKey::BoxOfficeAsc,
            SortKey::BoxOfficeAsc => SortKey::YearDesc,
            SortKey::YearDesc => SortKey::YearAsc,
            SortKey::YearAsc => SortKey::TitleAsc,
            SortKey::TitleAsc => SortKey::TitleDesc,
            SortKey::TitleDesc => SortKey::BoxOfficeDesc,
        }
    }

    /// Get the previous key in the cycle.
    pub fn prev(self) -> Self {
        match self {
            SortKey::BoxOfficeDesc => SortKey::TitleDesc,
            SortKey::BoxOfficeAsc => SortKey::BoxOfficeDesc,
            SortKey::YearDesc => SortKey::BoxOfficeAsc,
            SortKey::YearAsc => SortKey::YearDesc,
            SortKey::TitleAsc => SortKey::YearAsc,
            SortKey::TitleDesc => SortKey::TitleAsc,
        }
    }

    /// Label shown in the controls bar.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::BoxOfficeDesc => "Box office ↓",
            SortKey::BoxOfficeAsc => "Box office ↑",
            SortKey::YearDesc => "Year ↓",
            SortKey::YearAsc => "Year ↑",
            SortKey::TitleAsc => "Title A-Z",
            SortKey::TitleDesc => "Title Z-A",
        }
    }
}

/// The user's current filter and sort selections.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Free-text search over titles and directors, case-insensitive.
    pub search: String,
    /// Exact-match release year filter.
    pub year: Option<i32>,
    /// Country filter, matched as a substring of the raw country field.
    pub country: Option<String>,
    /// Sort order.
    pub sort: SortKey,
}

impl Criteria {
    /// Check whether a film passes every active filter.
    pub fn matches(&self, film: &Film) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty() && !film.matches_search(&term) {
            return false;
        }

        if let Some(year) = self.year {
            // Films without a year never match a concrete year filter.
            if film.release_year != Some(year) {
                return false;
            }
        }

        if let Some(country) = &self.country {
            let field = film.country.as_deref().unwrap_or("");
            if !field.to_lowercase().contains(&country.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_keys_fall_back_to_the_default() {
        assert_eq!(SortKey::parse("year_asc"), SortKey::YearAsc);
        assert_eq!(SortKey::parse("popularity"), SortKey::BoxOfficeDesc);
        assert_eq!(SortKey::parse(""), SortKey::BoxOfficeDesc);
    }

    #[test]
    fn cycling_forward_and_back_are_inverses() {
        let mut key = SortKey::default();
        for _ in 0..6 {
            assert_eq!(key.next().prev(), key);
            key = key.next();
        }
        assert_eq!(key, SortKey::default());
    }

    #[test]
    fn search_term_is_trimmed_and_lowercased() {
        let film = Film {
            title: "La Haine".to_string(),
            release_year: None,
            director: None,
            country: None,
            box_office: None,
        };

        let criteria = Criteria {
            search: "  HAINE ".to_string(),
            ..Criteria::default()
        };
        assert!(criteria.matches(&film));
    }

    #[test]
    fn year_filter_never_matches_a_missing_year() {
        let film = Film {
            title: "Undated".to_string(),
            release_year: None,
            director: None,
            country: None,
            box_office: None,
        };

        let criteria = Criteria {
            year: Some(1999),
            ..Criteria::default()
        };
        assert!(!criteria.matches(&film));
    }

    #[test]
    fn country_filter_matches_the_raw_field_as_a_substring() {
        let film = Film {
            title: "Coproduction".to_string(),
            release_year: None,
            director: None,
            country: Some("France, Germany".to_string()),
            box_office: None,
        };

        let france = Criteria {
            country: Some("france".to_string()),
            ..Criteria::default()
        };
        let italy = Criteria {
            country: Some("Italy".to_string()),
            ..Criteria::default()
        };
        assert!(france.matches(&film));
        assert!(!italy.matches(&film));
    }
}
