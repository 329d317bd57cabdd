//! Response envelopes for the movie REST endpoints

use std::fmt;

use moviedesk_domain::{Movie, MovieId};
use serde::{Deserialize, Serialize};

/// Body of `GET /movies` and `GET /movies/search/{field}/{term}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviesResponse {
    pub movies: Vec<Movie>,
}

/// Body of every mutation endpoint.
///
/// `success` is the only field the contract guarantees. The backend in this
/// workspace also reports the id of a freshly created movie; other servers
/// may not, so it stays optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,
}

impl MutationResponse {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            id: None,
        }
    }

    pub fn created(id: MovieId) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            id: None,
        }
    }
}

/// Which mutation a response or failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    /// Message shown to the user when the server rejects the mutation
    pub fn failure_message(&self) -> &'static str {
        match self {
            MutationKind::Create => "Error adding movie",
            MutationKind::Update => "Error updating movie",
            MutationKind::Delete => "Error deleting movie",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mutation_response_tolerates_extra_fields() {
        let response: MutationResponse =
            serde_json::from_value(json!({ "success": true, "message": "ok" })).unwrap();
        assert!(response.success);
        assert_eq!(response.id, None);
    }

    #[test]
    fn created_response_carries_id() {
        let value = serde_json::to_value(MutationResponse::created(MovieId::from(12))).unwrap();
        assert_eq!(value, json!({ "success": true, "id": 12 }));
    }

    #[test]
    fn failed_response_omits_id() {
        let value = serde_json::to_value(MutationResponse::failed()).unwrap();
        assert_eq!(value, json!({ "success": false }));
    }

    #[test]
    fn movies_response_reads_movies_field() {
        let response: MoviesResponse = serde_json::from_value(json!({
            "movies": [{
                "id": 1,
                "year": 1902,
                "title": "A Trip to the Moon",
                "origin_ethnicity": "French",
                "directors": "Georges Méliès",
                "cast": null,
                "genre": "sci-fi",
                "wiki_url": "https://en.wikipedia.org/wiki/A_Trip_to_the_Moon",
                "plot": null,
                "date_created": "2020-01-01T00:00:00Z"
            }]
        }))
        .unwrap();
        assert_eq!(response.movies.len(), 1);
        assert_eq!(response.movies[0].id, Some(MovieId::from(1)));
    }
}
