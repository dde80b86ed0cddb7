//! Process-local movie storage.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use movie_core::types::DbId;
use tokio::sync::RwLock;

use super::MovieRepository;
use crate::models::movie::{Movie, NewMovie};

/// In-memory movie storage keyed by id.
///
/// Ids start at 1 and are never reused, mirroring a BIGSERIAL column.
/// Each method holds the lock for its whole body, so a call is atomic with
/// respect to other calls.
pub struct InMemoryMovieRepo {
    movies: RwLock<BTreeMap<DbId, Movie>>,
    next_id: AtomicI64,
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryMovieRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepo {
    async fn find_all(&self) -> Result<Vec<Movie>, sqlx::Error> {
        Ok(self.movies.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        Ok(self.movies.read().await.get(&id).cloned())
    }

    async fn create(&self, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        let mut movies = self.movies.write().await;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let movie = input.clone().with_id(id);
        movies.insert(id, movie.clone());
        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<(), sqlx::Error> {
        let mut movies = self.movies.write().await;
        match movies.get_mut(&movie.id) {
            Some(stored) => {
                *stored = movie.clone();
                Ok(())
            }
            None => Err(sqlx::Error::RowNotFound),
        }
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.movies.write().await.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
