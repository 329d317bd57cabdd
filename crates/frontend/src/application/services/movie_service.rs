//! Movie Service - Fetch layer for the movie REST endpoints
//!
//! Each method issues exactly one request through `RawApiPort` and decodes
//! the body. Mutation methods hand the `MutationResponse` back unchanged;
//! deciding what a `success: false` means is the caller's job.

use std::sync::Arc;

use moviedesk_domain::{Movie, MovieDraft, MovieField, MovieId};
use moviedesk_shared::{routes, MoviesResponse, MutationResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Movie service for catalog reads and writes
#[derive(Clone)]
pub struct MovieService {
    api: Arc<dyn RawApiPort>,
}

impl MovieService {
    /// Create a new MovieService with the given API port
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// List every movie, in server order
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let value = self.api.get_json(routes::MOVIES).await?;
        let body: MoviesResponse = decode(value)?;
        tracing::debug!(count = body.movies.len(), "Loaded movies");
        Ok(body.movies)
    }

    /// Get a single movie; `None` when the server answers 404
    pub async fn get_movie(&self, id: &MovieId) -> Result<Option<Movie>, ApiError> {
        match self.api.get_json(&routes::movie(id)).await {
            Ok(value) => decode(value).map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Server-side substring search within one column
    pub async fn search_movies(
        &self,
        field: MovieField,
        term: &str,
    ) -> Result<Vec<Movie>, ApiError> {
        let value = self.api.get_json(&routes::search(field, term)).await?;
        let body: MoviesResponse = decode(value)?;
        Ok(body.movies)
    }

    /// Create a movie. The draft is merged over the creation defaults
    /// (`directors`, `cast` and `plot` set to null) before it is sent.
    pub async fn create_movie(&self, draft: MovieDraft) -> Result<MutationResponse, ApiError> {
        let body = encode(&draft.with_creation_defaults())?;
        mutation_response(self.api.post_json(routes::MOVIES, &body).await)
    }

    /// Overwrite a movie's fields
    pub async fn update_movie(
        &self,
        id: &MovieId,
        draft: &MovieDraft,
    ) -> Result<MutationResponse, ApiError> {
        let body = encode(draft)?;
        mutation_response(self.api.put_json(&routes::movie(id), &body).await)
    }

    /// Delete a movie
    pub async fn delete_movie(&self, id: &MovieId) -> Result<MutationResponse, ApiError> {
        mutation_response(self.api.delete_json(&routes::movie(id)).await)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn encode<T: Serialize>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

/// The backend reports store failures as `500 {"success": false}`. Such a
/// reply is still a well-formed mutation response, so it is returned as one.
fn mutation_response(result: Result<Value, ApiError>) -> Result<MutationResponse, ApiError> {
    match result {
        Ok(value) => decode(value),
        Err(ApiError::HttpError { status, body }) => {
            match serde_json::from_str::<MutationResponse>(&body) {
                Ok(response) => Ok(response),
                Err(_) => Err(ApiError::HttpError { status, body }),
            }
        }
        Err(e) => Err(e),
    }
}
