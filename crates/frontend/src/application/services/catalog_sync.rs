//! Catalog synchronizer - keeps the displayed list in step with the server
//!
//! The table's add/update/delete hooks land here. Each hook awaits exactly
//! one request and, if the server reports success, returns the `CatalogPatch`
//! that mirrors the change locally. A `success: false` reply becomes
//! `CatalogError::Rejected` and no patch; the table then keeps the edit open.
//! Nothing is retried.

use moviedesk_domain::{Movie, MovieDraft};
use moviedesk_shared::MutationKind;

use crate::application::{CatalogError, CatalogPatch};

use super::MovieService;

#[derive(Clone)]
pub struct CatalogSync {
    movies: MovieService,
}

impl CatalogSync {
    pub fn new(movies: MovieService) -> Self {
        Self { movies }
    }

    /// Fetch the full list for the initial render
    pub async fn load(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.list_movies().await?)
    }

    /// Table hook: a new row was submitted.
    ///
    /// The appended record is the submitted draft (with creation defaults
    /// applied), not a record re-read from the server. Once the server has
    /// accepted the row this cannot fail, even for a partial draft. If the
    /// server reports the new id it is attached so the row can be edited
    /// later.
    pub async fn add_row(&self, draft: MovieDraft) -> Result<CatalogPatch, CatalogError> {
        let response = self.movies.create_movie(draft.clone()).await?;
        if !response.success {
            tracing::warn!(title = ?draft.title, "Server rejected new movie");
            return Err(CatalogError::Rejected(MutationKind::Create));
        }

        let movie = draft.with_creation_defaults().into_submitted(response.id);
        tracing::info!(movie_id = ?movie.id, title = %movie.title, "Movie created");
        Ok(CatalogPatch::Append(movie))
    }

    /// Table hook: row `index` (showing `original`) was edited into `edited`
    pub async fn update_row(
        &self,
        index: usize,
        original: &Movie,
        edited: Movie,
    ) -> Result<CatalogPatch, CatalogError> {
        let id = original
            .id
            .clone()
            .ok_or(CatalogError::MissingId { index })?;

        let response = self
            .movies
            .update_movie(&id, &MovieDraft::from(&edited))
            .await?;
        if !response.success {
            tracing::warn!(movie_id = %id, index, "Server rejected movie update");
            return Err(CatalogError::Rejected(MutationKind::Update));
        }

        tracing::info!(movie_id = %id, index, "Movie updated");
        Ok(CatalogPatch::Replace {
            index,
            movie: Movie {
                id: Some(id),
                ..edited
            },
        })
    }

    /// Table hook: row `index` (showing `original`) was deleted
    pub async fn delete_row(
        &self,
        index: usize,
        original: &Movie,
    ) -> Result<CatalogPatch, CatalogError> {
        let id = original
            .id
            .clone()
            .ok_or(CatalogError::MissingId { index })?;

        let response = self.movies.delete_movie(&id).await?;
        if !response.success {
            tracing::warn!(movie_id = %id, index, "Server rejected movie delete");
            return Err(CatalogError::Rejected(MutationKind::Delete));
        }

        tracing::info!(movie_id = %id, index, "Movie deleted");
        Ok(CatalogPatch::Remove { index, id })
    }
}
