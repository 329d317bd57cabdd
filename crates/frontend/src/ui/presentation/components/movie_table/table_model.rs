//! Table options, per-column filtering, and paging
//!
//! Rows are always addressed by their position in the full movie list; the
//! filtered and paged views only carry those positions around. That keeps
//! the index handed to the edit hooks equal to the list position no matter
//! what filter or page is showing.

use std::collections::BTreeMap;

use moviedesk_domain::{Movie, MovieField, MovieId};

/// Where the add-row editor appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRowPosition {
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub filtering: bool,
    pub page_size: usize,
    /// Pad a short last page with blank rows
    pub empty_rows_when_paging: bool,
    pub add_row_position: AddRowPosition,
}

/// Options for the movie catalog table
pub const MOVIE_TABLE_OPTIONS: TableOptions = TableOptions {
    filtering: true,
    page_size: 25,
    empty_rows_when_paging: false,
    add_row_position: AddRowPosition::First,
};

impl TableOptions {
    /// Blank rows to render after `shown` data rows on a page
    pub fn padding_rows(&self, shown: usize) -> usize {
        if self.empty_rows_when_paging {
            self.page_size.saturating_sub(shown)
        } else {
            0
        }
    }
}

/// Per-column filter text. Matching is a case-insensitive substring test;
/// blank filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters {
    terms: BTreeMap<MovieField, String>,
}

impl ColumnFilters {
    pub fn get(&self, field: MovieField) -> &str {
        self.terms.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: MovieField, term: impl Into<String>) {
        let term = term.into();
        if term.trim().is_empty() {
            self.terms.remove(&field);
        } else {
            self.terms.insert(field, term);
        }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        self.terms.iter().all(|(field, term)| {
            movie
                .field_text(*field)
                .to_lowercase()
                .contains(&term.trim().to_lowercase())
        })
    }

    /// Positions (into `movies`) of the rows passing every filter
    pub fn visible_rows(&self, movies: &[Movie]) -> Vec<usize> {
        movies
            .iter()
            .enumerate()
            .filter(|(_, movie)| self.matches(movie))
            .map(|(index, _)| index)
            .collect()
    }
}

/// One page of a row list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based page, clamped into range
    pub page: usize,
    pub page_count: usize,
    /// Half-open range into the row list
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn new(total: usize, requested_page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = total.div_ceil(page_size).max(1);
        let page = requested_page.min(page_count - 1);
        let start = (page * page_size).min(total);
        let end = (start + page_size).min(total);
        Self {
            page,
            page_count,
            start,
            end,
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// "1-25 of 80", or "0-0 of 0" when empty
    pub fn label(&self) -> String {
        if self.total == 0 {
            "0-0 of 0".to_string()
        } else {
            format!("{}-{} of {}", self.start + 1, self.end, self.total)
        }
    }
}

/// The row whose plot panel is open. Rows with an id are remembered by it,
/// so the panel stays with its movie when rows above it are removed; rows
/// without one fall back to their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailRow {
    #[default]
    Closed,
    Movie(MovieId),
    Position(usize),
}

impl DetailRow {
    pub fn for_row(index: usize, movie: &Movie) -> Self {
        match &movie.id {
            Some(id) => DetailRow::Movie(id.clone()),
            None => DetailRow::Position(index),
        }
    }

    pub fn shows(&self, index: usize, movie: &Movie) -> bool {
        *self != DetailRow::Closed && *self == Self::for_row(index, movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, genre: &str, directors: Option<&str>) -> Movie {
        Movie {
            id: Some(MovieId::from(id)),
            year: Some(1960 + id as i32),
            title: title.to_string(),
            origin_ethnicity: "Italian".to_string(),
            directors: directors.map(str::to_string),
            cast: None,
            genre: genre.to_string(),
            wiki_url: format!("https://en.wikipedia.org/wiki/{title}"),
            plot: None,
        }
    }

    fn catalog() -> Vec<Movie> {
        vec![
            movie(0, "La Dolce Vita", "drama", Some("Federico Fellini")),
            movie(1, "L'Avventura", "drama", Some("Michelangelo Antonioni")),
            movie(2, "The Good, the Bad and the Ugly", "western", None),
            movie(3, "8½", "Drama", Some("Federico Fellini")),
        ]
    }

    #[test]
    fn catalog_options() {
        assert!(MOVIE_TABLE_OPTIONS.filtering);
        assert_eq!(MOVIE_TABLE_OPTIONS.page_size, 25);
        assert_eq!(MOVIE_TABLE_OPTIONS.padding_rows(3), 0);
        assert_eq!(MOVIE_TABLE_OPTIONS.add_row_position, AddRowPosition::First);
    }

    #[test]
    fn padding_only_when_enabled() {
        let padded = TableOptions {
            empty_rows_when_paging: true,
            ..MOVIE_TABLE_OPTIONS
        };
        assert_eq!(padded.padding_rows(20), 5);
        assert_eq!(padded.padding_rows(30), 0);
    }

    #[test]
    fn filters_are_case_insensitive_and_combine() {
        let mut filters = ColumnFilters::default();
        filters.set(MovieField::Genre, "DRAMA");
        assert_eq!(filters.visible_rows(&catalog()), vec![0, 1, 3]);

        filters.set(MovieField::Directors, "fellini");
        assert_eq!(filters.visible_rows(&catalog()), vec![0, 3]);
    }

    #[test]
    fn blank_filter_is_removed() {
        let mut filters = ColumnFilters::default();
        filters.set(MovieField::Title, "vita");
        filters.set(MovieField::Title, "  ");
        assert_eq!(filters, ColumnFilters::default());
        assert_eq!(filters.visible_rows(&catalog()).len(), 4);
    }

    #[test]
    fn null_fields_only_match_empty_filters() {
        let mut filters = ColumnFilters::default();
        filters.set(MovieField::Directors, "e");
        assert!(!filters.visible_rows(&catalog()).contains(&2));
    }

    #[test]
    fn year_filters_match_digits() {
        let mut filters = ColumnFilters::default();
        filters.set(MovieField::Year, "1962");
        assert_eq!(filters.visible_rows(&catalog()), vec![2]);
    }

    #[test]
    fn page_window_clamps_requested_page() {
        let window = PageWindow::new(60, 9, 25);
        assert_eq!(window.page, 2);
        assert_eq!(window.page_count, 3);
        assert_eq!((window.start, window.end), (50, 60));
        assert!(!window.has_next());
        assert!(window.has_previous());
        assert_eq!(window.label(), "51-60 of 60");
    }

    #[test]
    fn open_detail_follows_its_movie_after_a_delete_above() {
        let mut movies = catalog();
        let detail = DetailRow::for_row(2, &movies[2]);
        assert!(detail.shows(2, &movies[2]));

        movies.remove(0);

        assert!(!detail.shows(2, &movies[2]));
        assert!(detail.shows(1, &movies[1]));
    }

    #[test]
    fn unsaved_rows_open_by_position() {
        let unsaved = Movie { id: None, ..catalog()[0].clone() };
        let detail = DetailRow::for_row(4, &unsaved);

        assert!(detail.shows(4, &unsaved));
        assert!(!detail.shows(5, &unsaved));
        assert!(!DetailRow::Closed.shows(4, &unsaved));
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let window = PageWindow::new(0, 0, 25);
        assert_eq!(window.page_count, 1);
        assert_eq!((window.start, window.end), (0, 0));
        assert_eq!(window.label(), "0-0 of 0");
    }
}
