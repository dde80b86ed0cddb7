use std::sync::Arc;

use movie_db::repositories::MovieRepository;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Movie storage. PostgreSQL when configured, in-memory otherwise.
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }
}
