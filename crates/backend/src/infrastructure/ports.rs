//! Port traits for infrastructure boundaries.
//!
//! Handlers and the seeder only see these traits; `sqlite` provides the
//! production implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moviedesk_domain::{Movie, MovieField};

// =============================================================================
// Error Types
// =============================================================================

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A seed file row could not be read
    #[error("Seed data error: {0}")]
    Seed(String),
}

impl RepoError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn seed(message: impl ToString) -> Self {
        Self::Seed(message.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// =============================================================================
// Repository Ports
// =============================================================================

/// Movie table access. Ids are the SQLite rowids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Every movie, newest release year first
    async fn list(&self) -> Result<Vec<Movie>, RepoError>;

    async fn get(&self, id: i64) -> Result<Option<Movie>, RepoError>;

    /// Substring match (`LIKE %term%`) on one column
    async fn search(&self, field: MovieField, term: &str) -> Result<Vec<Movie>, RepoError>;

    /// Insert and return the new id. The movie's own `id` is ignored.
    async fn create(&self, movie: &Movie) -> Result<i64, RepoError>;

    /// Write every editable column of `movie` to row `id`. Callers merge a
    /// partial edit over the stored row first.
    async fn update(&self, id: i64, movie: &Movie) -> Result<(), RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}

// =============================================================================
// Infrastructure Ports
// =============================================================================

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
