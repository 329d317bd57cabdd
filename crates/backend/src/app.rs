//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::MovieRepo;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub movies: Arc<dyn MovieRepo>,
}

impl App {
    pub fn new(movies: Arc<dyn MovieRepo>) -> Self {
        Self { movies }
    }
}
