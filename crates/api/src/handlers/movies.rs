//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movie_core::error::CoreError;
use movie_core::types::DbId;
use movie_db::models::movie::{Movie, NewMovie};

use crate::error::{AppError, AppResult};
use crate::routes::API_BASE_PATH;
use crate::state::AppState;

/// GET /api/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.movies.find_all().await?;
    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = find_existing(&state, id).await?;
    Ok(Json(movie))
}

/// POST /api/movies
///
/// Responds 201 with a confirmation message; the new movie's URL is in the
/// `Location` header.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewMovie>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movies.create(&input).await?;

    tracing::info!(movie_id = movie.id, title = ?movie.title, "Movie created");

    let location = format!("{API_BASE_PATH}/movies/{}", movie.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], "Movie created"))
}

/// PUT /api/movies/{id}
///
/// Replaces all five business fields of the stored movie. Concurrent
/// updates to the same id are not serialized; the last write wins.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<NewMovie>,
) -> AppResult<&'static str> {
    let mut movie = find_existing(&state, id).await?;
    movie.apply(input);
    state.movies.update(&movie).await?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok("Movie updated successfully")
}

/// DELETE /api/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<&'static str> {
    find_existing(&state, id).await?;
    state.movies.delete(id).await?;

    tracing::info!(movie_id = id, "Movie deleted");

    Ok("Movie deleted successfully")
}

async fn find_existing(state: &AppState, id: DbId) -> AppResult<Movie> {
    state
        .movies
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::movie_not_found(id)))
}
