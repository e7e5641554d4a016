//! Film card view models.

use super::formatters::format_currency;
use crate::data::Film;

const UNKNOWN: &str = "Unknown";

/// Display strings for one film card.
///
/// Building the card is a pure function of the film, so the rendering layer
/// stays free of formatting decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Title, verbatim.
    pub title: String,
    /// Release year, or "Unknown".
    pub year: String,
    /// Director, or "Unknown".
    pub director: String,
    /// Box office as US currency, or "Unknown".
    pub box_office: String,
    /// Country, verbatim, or "Unknown".
    pub country: String,
}

impl CardView {
    /// Build the card for one film.
    pub fn from_film(film: &Film) -> Self {
        Self {
            title: film.title.clone(),
            year: film
                .release_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            director: film
                .director
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            // A recorded gross of zero stands in for "no figure known" in
            // the source data, so it reads as unknown too.
            box_office: match film.box_office {
                Some(gross) if gross > 0.0 => format_currency(gross),
                _ => UNKNOWN.to_string(),
            },
            country: film
                .country
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_full_record_formats_every_field() {
        let film = Film {
            title: "Spirited Away".to_string(),
            release_year: Some(2001),
            director: Some("Hayao Miyazaki".to_string()),
            country: Some("Japan".to_string()),
            box_office: Some(395_580_000.0),
        };

        let card = CardView::from_film(&film);
        assert_eq!(card.title, "Spirited Away");
        assert_eq!(card.year, "2001");
        assert_eq!(card.director, "Hayao Miyazaki");
        assert_eq!(card.box_office, "$395,580,000");
        assert_eq!(card.country, "Japan");
    }

    #[test]
    fn missing_fields_read_as_unknown() {
        let film = Film {
            title: "Obscure Short".to_string(),
            release_year: None,
            director: None,
            country: None,
            box_office: None,
        };

        let card = CardView::from_film(&film);
        assert_eq!(card.year, "Unknown");
        assert_eq!(card.director, "Unknown");
        assert_eq!(card.box_office, "Unknown");
        assert_eq!(card.country, "Unknown");
    }

    #[test]
    fn a_zero_gross_reads_as_unknown() {
        let film = Film {
            title: "Unreleased".to_string(),
            release_year: None,
            director: None,
            country: Some(String::new()),
            box_office: Some(0.0),
        };

        let card = CardView::from_film(&film);
        assert_eq!(card.box_office, "Unknown");
        assert_eq!(card.country, "Unknown");
    }
}
