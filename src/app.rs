//! Application state and command dispatch.

use crate::data::{DataLoader, Film, FilterOptions};
use crate::query::pager::{self, FILMS_PER_PAGE};
use crate::query::{self, Criteria, SortKey};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Text input state for the search box.
///
/// The buffer holds in-progress edits; the query is the last submitted text
/// and is what the query engine sees.
#[derive(Debug, Default)]
pub struct SearchInput {
    editing: bool,
    buffer: String,
    query: String,
}

impl SearchInput {
    /// Begin editing the search text.
    pub fn start(&mut self) {
        self.editing = true;
    }

    /// Check if the search box has focus.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Append a character to the buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Commit the buffer as the active query.
    ///
    /// Submitting an emptied buffer clears the search, so the committed text
    /// always mirrors what the box shows.
    pub fn submit(&mut self) {
        self.query = self.buffer.clone();
        self.editing = false;
    }

    /// Abandon edits and restore the last submitted text.
    pub fn cancel(&mut self) {
        self.buffer = self.query.clone();
        self.editing = false;
    }

    /// Drop both the buffer and the active query.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.query.clear();
        self.editing = false;
    }

    /// Get the in-progress text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Get the last submitted text.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Named user and system actions, dispatched through [`App::dispatch`].
///
/// Keeping the state transitions behind one dispatch function keeps them
/// testable without a terminal.
#[derive(Debug)]
pub enum Command {
    /// The search box was submitted.
    SearchSubmitted,
    /// The year or country filter changed.
    FilterChanged,
    /// The sort key changed.
    SortChanged,
    /// Advance one page.
    PageNext,
    /// Go back one page.
    PagePrev,
    /// The dataset finished loading.
    DataLoaded(Vec<Film>),
    /// The dataset could not be loaded.
    LoadFailed(String),
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Dataset source, a URL or a filesystem path.
    pub source: String,
    /// Full collection, set once after a successful load.
    pub films: Vec<Film>,
    /// Current result set.
    pub filtered: Vec<Film>,
    /// Distinct filter choices.
    pub options: FilterOptions,
    /// Search input state.
    pub search: SearchInput,
    /// Selected index into `options.years`, `None` for all years.
    pub year_index: Option<usize>,
    /// Selected index into `options.countries`, `None` for all countries.
    pub country_index: Option<usize>,
    /// Current sort order.
    pub sort: SortKey,
    /// Current page, 1-based.
    pub current_page: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Loading indicator.
    pub loading: bool,
    /// Error message from a failed load.
    pub error_message: Option<String>,
}

impl App {
    /// Create a new application instance.
    pub fn new(source: String, sort: SortKey) -> Self {
        Self {
            source,
            films: Vec::new(),
            filtered: Vec::new(),
            options: FilterOptions::default(),
            search: SearchInput::default(),
            year_index: None,
            country_index: None,
            sort,
            current_page: 1,
            status: "Loading films...".to_string(),
            theme: Theme::GruvboxDark,
            loading: true,
            error_message: None,
        }
    }

    /// Run the one-shot dataset load and dispatch the outcome.
    pub fn load(&mut self) {
        match DataLoader::load(&self.source) {
            Ok(films) => self.dispatch(Command::DataLoaded(films)),
            Err(e) => {
                tracing::error!("Error loading films: {}", e);
                self.dispatch(Command::LoadFailed(e.to_string()));
            }
        }
    }

    /// Assemble the current criteria from the control states.
    pub fn criteria(&self) -> Criteria {
        Criteria {
            search: self.search.query().to_string(),
            year: self
                .year_index
                .and_then(|i| self.options.years.get(i).copied()),
            country: self
                .country_index
                .and_then(|i| self.options.countries.get(i).cloned()),
            sort: self.sort,
        }
    }

    /// Apply a command to the state.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::SearchSubmitted | Command::FilterChanged | Command::SortChanged => {
                self.refresh();
                self.status = format!("{} films match", self.filtered.len());
            }
            Command::PageNext => {
                if self.current_page < self.total_pages() {
                    self.current_page += 1;
                }
            }
            Command::PagePrev => {
                if self.current_page > 1 {
                    self.current_page -= 1;
                }
            }
            Command::DataLoaded(films) => {
                self.options = FilterOptions::index(&films);
                self.films = films;
                self.refresh();
                self.status = format!("{} films loaded", self.films.len());
                self.error_message = None;
                self.loading = false;
            }
            Command::LoadFailed(message) => {
                self.error_message = Some(message);
                self.status = "Error loading film data".to_string();
                self.loading = false;
            }
        }
    }

    // Every criteria change rebuilds the result set wholesale and lands the
    // user back on page one.
    fn refresh(&mut self) {
        self.filtered = query::apply(&self.films, &self.criteria());
        self.current_page = 1;
    }

    /// Total pages for the current result set.
    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.filtered.len(), FILMS_PER_PAGE)
    }

    /// The films on the current page.
    pub fn page(&self) -> &[Film] {
        pager::page_slice(&self.filtered, self.current_page, FILMS_PER_PAGE)
    }

    /// Select the next or previous year choice.
    pub fn cycle_year(&mut self, forward: bool) {
        self.year_index = cycle_option(self.year_index, self.options.years.len(), forward);
        self.dispatch(Command::FilterChanged);
        self.status = format!("Year: {}", self.year_label());
    }

    /// Select the next or previous country choice.
    pub fn cycle_country(&mut self, forward: bool) {
        self.country_index =
            cycle_option(self.country_index, self.options.countries.len(), forward);
        self.dispatch(Command::FilterChanged);
        self.status = format!("Country: {}", self.country_label());
    }

    /// Select the next or previous sort order.
    pub fn cycle_sort(&mut self, forward: bool) {
        self.sort = if forward {
            self.sort.next()
        } else {
            self.sort.prev()
        };
        self.dispatch(Command::SortChanged);
        self.status = format!("Sort: {}", self.sort.label());
    }

    /// Clear every filter and restore the default sort order.
    pub fn reset_criteria(&mut self) {
        self.search.clear();
        self.year_index = None;
        self.country_index = None;
        self.sort = SortKey::default();
        self.dispatch(Command::FilterChanged);
        self.status = "Filters cleared".to_string();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Label for the year control.
    pub fn year_label(&self) -> String {
        match self.year_index.and_then(|i| self.options.years.get(i)) {
            Some(year) => year.to_string(),
            None => "All".to_string(),
        }
    }

    /// Label for the country control.
    pub fn country_label(&self) -> &str {
        match self.country_index.and_then(|i| self.options.countries.get(i)) {
            Some(country) => country,
            None => "All",
        }
    }
}

// Advance an optional selection through `None -> 0 -> .. -> len-1 -> None`,
// or the reverse. `None` is the "All" position.
fn cycle_option(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match (current, forward) {
        (None, true) => Some(0),
        (Some(i), true) if i + 1 < len => Some(i + 1),
        (Some(_), true) => None,
        (None, false) => Some(len - 1),
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, year: Option<i32>, country: Option<&str>) -> Film {
        Film {
            title: title.to_string(),
            release_year: year,
            director: None,
            country: country.map(str::to_string),
            box_office: None,
        }
    }

    fn loaded_app(films: Vec<Film>) -> App {
        let mut app = App::new("films.json".to_string(), SortKey::default());
        app.dispatch(Command::DataLoaded(films));
        app
    }

    fn many_films(count: usize) -> Vec<Film> {
        (0..count)
            .map(|i| film(&format!("Film {i:02}"), Some(2000), None))
            .collect()
    }

    #[test]
    fn loading_populates_options_and_results() {
        let app = loaded_app(vec![
            film("A", Some(2000), Some("France, Germany")),
            film("B", Some(2010), Some("Japan")),
        ]);

        assert!(!app.loading);
        assert_eq!(app.options.years, vec![2010, 2000]);
        assert_eq!(app.options.countries, vec!["France", "Germany", "Japan"]);
        assert_eq!(app.filtered.len(), 2);
        assert_eq!(app.current_page, 1);
    }

    #[test]
    fn a_failed_load_keeps_the_catalogue_empty() {
        let mut app = App::new("films.json".to_string(), SortKey::default());
        app.dispatch(Command::LoadFailed("HTTP 500".to_string()));

        assert!(!app.loading);
        assert_eq!(app.error_message.as_deref(), Some("HTTP 500"));
        assert!(app.films.is_empty());
        assert!(app.page().is_empty());

        // Queries over the empty catalogue stay inert.
        app.search.start();
        app.search.input('a');
        app.search.submit();
        app.dispatch(Command::SearchSubmitted);
        assert!(app.page().is_empty());
    }

    #[test]
    fn criteria_changes_reset_to_the_first_page() {
        let mut app = loaded_app(many_films(25));
        app.dispatch(Command::PageNext);
        assert_eq!(app.current_page, 2);

        app.cycle_year(true);
        assert_eq!(app.current_page, 1);

        app.dispatch(Command::PageNext);
        app.cycle_sort(true);
        assert_eq!(app.current_page, 1);

        app.dispatch(Command::PageNext);
        app.search.start();
        app.search.input('f');
        app.search.submit();
        app.dispatch(Command::SearchSubmitted);
        assert_eq!(app.current_page, 1);
    }

    #[test]
    fn page_navigation_is_a_no_op_at_the_boundaries() {
        let mut app = loaded_app(many_films(25));
        assert_eq!(app.total_pages(), 3);

        app.dispatch(Command::PagePrev);
        assert_eq!(app.current_page, 1);

        for _ in 0..5 {
            app.dispatch(Command::PageNext);
        }
        assert_eq!(app.current_page, 3);
        assert_eq!(app.page().len(), 1);
    }

    #[test]
    fn search_submit_narrows_the_result_set() {
        let mut app = loaded_app(vec![
            film("Alien", None, None),
            film("Brazil", None, None),
        ]);

        app.search.start();
        assert!(app.search.is_editing());
        app.search.input('b');
        app.search.submit();
        app.dispatch(Command::SearchSubmitted);

        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.filtered[0].title, "Brazil");

        // Submitting an emptied box shows everything again.
        app.search.start();
        app.search.backspace();
        app.search.submit();
        app.dispatch(Command::SearchSubmitted);
        assert_eq!(app.filtered.len(), 2);
    }

    #[test]
    fn cancelling_an_edit_restores_the_committed_query() {
        let mut app = loaded_app(vec![film("Alien", None, None)]);

        app.search.start();
        app.search.input('a');
        app.search.submit();
        app.dispatch(Command::SearchSubmitted);

        app.search.start();
        app.search.input('x');
        app.search.cancel();
        assert_eq!(app.search.buffer(), "a");
        assert_eq!(app.search.query(), "a");
    }

    #[test]
    fn filter_selections_feed_the_criteria() {
        let mut app = loaded_app(vec![
            film("A", Some(2000), Some("France")),
            film("B", Some(2010), Some("Japan")),
        ]);

        app.cycle_year(true);
        let criteria = app.criteria();
        assert_eq!(criteria.year, Some(2010));
        assert_eq!(app.filtered.len(), 1);

        app.cycle_country(true);
        let criteria = app.criteria();
        assert_eq!(criteria.country.as_deref(), Some("France"));
        assert!(app.filtered.is_empty());
        assert_eq!(app.total_pages(), 1);
    }

    #[test]
    fn reset_restores_the_default_criteria() {
        let mut app = loaded_app(vec![
            film("A", Some(2000), Some("France")),
            film("B", Some(2010), Some("Japan")),
        ]);

        app.cycle_year(true);
        app.cycle_country(true);
        app.cycle_sort(true);
        app.reset_criteria();

        assert_eq!(app.year_index, None);
        assert_eq!(app.country_index, None);
        assert_eq!(app.sort, SortKey::default());
        assert_eq!(app.filtered.len(), 2);
    }

    #[test]
    fn option_cycling_wraps_through_all() {
        assert_eq!(cycle_option(None, 2, true), Some(0));
        assert_eq!(cycle_option(Some(0), 2, true), Some(1));
        assert_eq!(cycle_option(Some(1), 2, true), None);
        assert_eq!(cycle_option(None, 2, false), Some(1));
        assert_eq!(cycle_option(Some(0), 2, false), None);
        assert_eq!(cycle_option(None, 0, true), None);
    }
}
