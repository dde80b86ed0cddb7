pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Base path every resource is mounted under.
pub const API_BASE_PATH: &str = "/api";

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                                          list, create
/// /movies/{id}                                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
