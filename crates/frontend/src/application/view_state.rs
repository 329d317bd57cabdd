//! Catalog view state
//!
//! The displayed movie list plus the loading flag, and the patches the
//! synchronizer produces after a successful mutation. Patches are applied to
//! whatever the list looks like once the response arrives, never to a copy
//! taken before the request went out.

use moviedesk_domain::{Movie, MovieId};

use super::CatalogError;

/// A local change mirroring one successful server mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPatch {
    /// A created movie, appended at the end of the list
    Append(Movie),
    /// An edited movie, written over the row the table reported
    Replace { index: usize, movie: Movie },
    /// A deleted movie, removed from the row the table reported
    Remove { index: usize, id: MovieId },
}

/// The movie list as the table shows it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    movies: Vec<Movie>,
    is_loading: bool,
    load_error: Option<String>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Why the last full load failed, if it did
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Mark a full load as in flight
    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.load_error = None;
    }

    /// Settle a full load. The loading flag clears either way; on failure
    /// the list is left empty.
    pub fn finish_load(&mut self, result: Result<Vec<Movie>, CatalogError>) {
        self.is_loading = false;
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load movies");
                self.movies = Vec::new();
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Apply a mutation patch.
    ///
    /// Rows are addressed by position. When the row at that position does
    /// not carry the id the patch expects, the patch is still applied and a
    /// warning is logged.
    pub fn apply(&mut self, patch: CatalogPatch) -> Result<(), CatalogError> {
        let len = self.movies.len();
        match patch {
            CatalogPatch::Append(movie) => {
                self.movies.push(movie);
            }
            CatalogPatch::Replace { index, movie } => {
                let slot = self
                    .movies
                    .get_mut(index)
                    .ok_or(CatalogError::RowOutOfRange { index, len })?;
                if slot.id != movie.id {
                    tracing::warn!(
                        index,
                        expected = ?movie.id,
                        found = ?slot.id,
                        "Row index does not match edited movie"
                    );
                }
                *slot = movie;
            }
            CatalogPatch::Remove { index, id } => {
                let current = self
                    .movies
                    .get(index)
                    .ok_or(CatalogError::RowOutOfRange { index, len })?;
                if current.id.as_ref() != Some(&id) {
                    tracing::warn!(
                        index,
                        expected = %id,
                        found = ?current.id,
                        "Row index does not match deleted movie"
                    );
                }
                self.movies.remove(index);
            }
        }
        Ok(())
    }
}
