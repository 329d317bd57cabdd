//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use moviedesk_domain::{DomainError, Movie, MovieDraft, MovieField, MovieId};
use moviedesk_shared::{routes, MoviesResponse, MutationKind, MutationResponse};

use crate::app::App;
use crate::infrastructure::ports::RepoError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(routes::MOVIES, get(list_movies).post(create_movie))
        .route(
            routes::MOVIE_PATTERN,
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route(routes::SEARCH_PATTERN, get(search_movies))
}

async fn list_movies(State(app): State<Arc<App>>) -> Result<Json<MoviesResponse>, ApiError> {
    let movies = app.movies.list().await?;
    Ok(Json(MoviesResponse { movies }))
}

async fn get_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id)?;
    let movie = app.movies.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(movie))
}

async fn search_movies(
    State(app): State<Arc<App>>,
    Path((field, term)): Path<(String, String)>,
) -> Result<Json<MoviesResponse>, ApiError> {
    let field: MovieField = field
        .parse()
        .map_err(|e: DomainError| ApiError::BadRequest(e.to_string()))?;
    let movies = app.movies.search(field, &term).await?;
    Ok(Json(MoviesResponse { movies }))
}

// =============================================================================
// Mutations
// =============================================================================

async fn create_movie(
    State(app): State<Arc<App>>,
    Json(draft): Json<MovieDraft>,
) -> Result<Json<MutationResponse>, ApiError> {
    let movie = draft
        .into_movie(None)
        .map_err(|e| ApiError::mutation(MutationKind::Create, e))?;

    let id = app
        .movies
        .create(&movie)
        .await
        .map_err(|e| ApiError::mutation(MutationKind::Create, e))?;

    tracing::info!(movie_id = id, title = %movie.title, "Movie created");
    Ok(Json(MutationResponse::created(MovieId::from(id))))
}

/// PUT: the body is merged over the stored row, so omitted fields keep their
/// values and an explicit `null` clears a nullable one.
async fn update_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(draft): Json<MovieDraft>,
) -> Result<Json<MutationResponse>, ApiError> {
    let id = parse_id(&id)?;
    let existing = app.movies.get(id).await?.ok_or(ApiError::NotFound)?;

    let movie = draft
        .merged_over(MovieDraft::from(&existing))
        .into_movie(existing.id.clone())
        .map_err(|e| ApiError::mutation(MutationKind::Update, e))?;

    app.movies
        .update(id, &movie)
        .await
        .map_err(|e| ApiError::mutation(MutationKind::Update, e))?;

    tracing::info!(movie_id = id, "Movie updated");
    Ok(Json(MutationResponse::succeeded()))
}

async fn delete_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>, ApiError> {
    let id = parse_id(&id)?;
    app.movies.get(id).await?.ok_or(ApiError::NotFound)?;

    app.movies
        .delete(id)
        .await
        .map_err(|e| ApiError::mutation(MutationKind::Delete, e))?;

    tracing::info!(movie_id = id, "Movie deleted");
    Ok(Json(MutationResponse::succeeded()))
}

/// Ids are integers; anything else names no movie
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
    /// A create/update/delete that failed after the request was accepted.
    /// Answers 500 with `{"success": false}`; the cause is only logged.
    Mutation { kind: MutationKind, cause: String },
}

impl ApiError {
    fn mutation(kind: MutationKind, cause: impl ToString) -> Self {
        ApiError::Mutation {
            kind,
            cause: cause.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::info!(error = %msg, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
            ApiError::Mutation { kind, cause } => {
                tracing::info!(operation = %kind, error = %cause, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MutationResponse::failed()),
                )
                    .into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        if e.is_not_found() {
            return ApiError::NotFound;
        }
        ApiError::Internal(e.to_string())
    }
}
