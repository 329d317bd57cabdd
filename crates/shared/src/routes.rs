//! Route paths for the movie REST endpoints.
//!
//! Paths are origin-relative so the web build can issue same-origin requests;
//! native clients join them onto a configured base URL.

use moviedesk_domain::{MovieField, MovieId};
use url::Url;

/// Collection route: list (`GET`) and create (`POST`)
pub const MOVIES: &str = "/movies";

/// Axum route pattern for a single movie
pub const MOVIE_PATTERN: &str = "/movies/{id}";

/// Axum route pattern for field search
pub const SEARCH_PATTERN: &str = "/movies/search/{field}/{term}";

/// Item route: get (`GET`), update (`PUT`), delete (`DELETE`)
pub fn movie(id: &MovieId) -> String {
    encode_segments(&["movies", id.as_str()])
}

/// Search route for `term` within one column
pub fn search(field: MovieField, term: &str) -> String {
    encode_segments(&["movies", "search", field.as_str(), term])
}

fn encode_segments(segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return format!("/{}", segments.join("/"));
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}
