//! Repository for the `movies` table.

use async_trait::async_trait;
use movie_core::types::DbId;
use sqlx::PgPool;

use super::MovieRepository;
use crate::models::movie::{Movie, NewMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "title, genre, release_year, description, director, id";

/// PostgreSQL-backed movie storage.
///
/// Every method opens its own transaction and commits it before returning.
/// An early `?` drops the transaction, which rolls it back.
#[derive(Clone)]
pub struct MovieRepo {
    pool: PgPool,
}

impl MovieRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for MovieRepo {
    async fn find_all(&self) -> Result<Vec<Movie>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        let movies = sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(movies)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(movie)
    }

    async fn create(&self, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (title, genre, release_year, description, director)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(&input.description)
            .bind(&input.director)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(movie_id = movie.id, "Inserted movie row");
        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE movies SET
                title = $2,
                genre = $3,
                release_year = $4,
                description = $5,
                director = $6
             WHERE id = $1",
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.release_year)
        .bind(&movie.description)
        .bind(&movie.director)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM movies WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_some() {
            sqlx::query("DELETE FROM movies WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
