//! Repository layer.
//!
//! [`MovieRepository`] is the seam between the HTTP handlers and storage.
//! [`MovieRepo`] talks to PostgreSQL; [`InMemoryMovieRepo`] keeps rows in
//! process memory for local runs and tests.

pub mod memory;
pub mod movie_repo;

pub use memory::InMemoryMovieRepo;
pub use movie_repo::MovieRepo;

use async_trait::async_trait;
use movie_core::types::DbId;

use crate::models::movie::{Movie, NewMovie};

/// CRUD access to stored movies.
///
/// Each call is its own unit of work: it either applies fully or not at all,
/// and nothing spans two calls.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Every stored movie, in storage order.
    async fn find_all(&self) -> Result<Vec<Movie>, sqlx::Error>;

    /// The movie with `id`, or `None` if no row matches.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error>;

    /// Store a new movie and return it with its assigned id.
    async fn create(&self, input: &NewMovie) -> Result<Movie, sqlx::Error>;

    /// Write the business fields of `movie` to the row with the same id.
    ///
    /// An unknown id is rejected with [`sqlx::Error::RowNotFound`]; nothing
    /// is inserted.
    async fn update(&self, movie: &Movie) -> Result<(), sqlx::Error>;

    /// Remove the movie with `id` if it exists. Unknown ids are a no-op.
    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
