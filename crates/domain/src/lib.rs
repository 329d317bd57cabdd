//! Core domain types for the movie catalog.
//!
//! Everything here is plain data: the full `Movie` record as the server
//! stores it, the partial `MovieDraft` the client edits and submits, and the
//! `MovieField` vocabulary shared by table columns and server-side search.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Movie, MovieDraft, MovieField};
pub use error::DomainError;
pub use ids::MovieId;
